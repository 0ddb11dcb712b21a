//! Core storefront engine for the M. Gyamprah Enterprise site.
//! This crate is the single source of truth for page behavior: cart state
//! and persistence, catalog filtering, panel/nav/reveal state, and the
//! simulated contact form. Rendering DOM nodes is the embedder's job.

pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod page;
pub mod render;
pub mod repo;
pub mod service;

pub use catalog::filter::{ProductFilter, FILTER_ALL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cart::{AddOutcome, Cart, CartDataError, LineItem, DEFAULT_ITEM_NAME};
pub use model::product::Product;
pub use page::command::Command;
pub use page::controller::Storefront;
pub use page::reveal::{RevealTracker, REVEAL_THRESHOLD};
pub use render::{
    format_amount, render_cart, CartView, LineView, CURRENCY_LABEL, EMPTY_CART_MESSAGE,
};
pub use repo::cart_repo::{
    CartRepository, RepoError, RepoResult, SqliteCartRepository, CART_SLOT_KEY,
};
pub use service::cart_service::{CartService, RestoreOutcome};
pub use service::contact_service::{
    now_epoch_ms, ContactService, FormFeedback, SubmissionId, SENDING_MESSAGE, SUBMIT_DELAY_MS,
    SUCCESS_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
