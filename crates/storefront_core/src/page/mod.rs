//! Page behavior layer: commands, chrome state and the controller.
//!
//! # Responsibility
//! - Define the explicit command surface the embedding UI drives.
//! - Own all page-level state the original site kept in ad-hoc globals
//!   (cart panel, mobile nav, reveal tracking, active filter).
//!
//! # Invariants
//! - Panel visibility is orthogonal to cart contents.
//! - All mutation happens synchronously inside `dispatch`/`pump_deferred`
//!   calls made by the embedder's event loop.

pub mod command;
pub mod controller;
pub mod nav;
pub mod panel;
pub mod reveal;
