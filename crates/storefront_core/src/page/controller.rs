//! Page controller.
//!
//! # Responsibility
//! - Own every piece of page state (cart service, catalog filter, panel,
//!   nav menu, reveal tracker, contact form) and apply [`Command`]s to it.
//! - Drive deferred work when the embedder pumps the clock forward.
//!
//! # Invariants
//! - The overlay is visible exactly while the cart panel is open.
//! - Adding to the cart opens the panel; dismissing the overlay closes
//!   both the panel and the nav menu.
//! - Commands touching persistence surface storage failures; everything
//!   else is infallible state manipulation.

use chrono::{Datelike, Local};
use log::info;

use crate::catalog::filter::ProductFilter;
use crate::model::cart::Cart;
use crate::model::product::Product;
use crate::page::command::Command;
use crate::page::nav::NavMenu;
use crate::page::panel::PanelState;
use crate::page::reveal::RevealTracker;
use crate::render::CartView;
use crate::repo::cart_repo::{CartRepository, RepoResult};
use crate::service::cart_service::{CartService, RestoreOutcome};
use crate::service::contact_service::{ContactService, FormFeedback, SubmissionId};

/// Root state machine for one storefront page.
pub struct Storefront<R: CartRepository> {
    cart: CartService<R>,
    products: Vec<Product>,
    filter: ProductFilter,
    panel: PanelState,
    nav: NavMenu,
    reveal: RevealTracker,
    contact: ContactService,
    footer_year: i32,
}

impl<R: CartRepository> Storefront<R> {
    /// Initializes the page: restores the persisted cart, seeds the
    /// catalog, and captures the footer year from the local clock.
    pub fn new(repo: R, products: Vec<Product>) -> RepoResult<Self> {
        let cart = CartService::restore(repo)?;
        let footer_year = Local::now().year();

        info!(
            "event=page_init module=page status=ok products={} footer_year={footer_year}",
            products.len()
        );

        Ok(Self {
            cart,
            products,
            filter: ProductFilter::default(),
            panel: PanelState::default(),
            nav: NavMenu::default(),
            reveal: RevealTracker::default(),
            contact: ContactService::new(),
            footer_year,
        })
    }

    /// Applies one user interaction at `now_ms` (epoch milliseconds).
    pub fn dispatch(&mut self, command: Command, now_ms: i64) -> RepoResult<()> {
        match command {
            Command::AddToCart { name, price } => {
                self.cart.add_item(&name, price)?;
                self.panel.open();
            }
            Command::RemoveFromCart { name } => {
                self.cart.remove_item(&name)?;
            }
            Command::OpenCartPanel => self.panel.open(),
            Command::CloseCartPanel => self.panel.close(),
            Command::DismissOverlay => {
                self.panel.close();
                self.nav.close();
            }
            Command::ToggleNavMenu => self.nav.toggle(),
            Command::NavLinkActivated => self.nav.close(),
            Command::ApplyFilter { filter } => {
                self.filter.set(&filter);
                info!(
                    "event=filter_apply module=page status=ok active={}",
                    self.filter.active()
                );
            }
            Command::SubmitContactForm => {
                self.contact.submit(now_ms);
            }
        }
        Ok(())
    }

    /// Completes deferred work (contact submissions) due by `now_ms` and
    /// returns the ids of submissions that finished.
    pub fn pump_deferred(&mut self, now_ms: i64) -> Vec<SubmissionId> {
        self.contact.poll_due(now_ms)
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    /// Display representation of the current cart.
    pub fn cart_view(&self) -> CartView {
        self.cart.view()
    }

    /// How the cart was initialized at construction.
    pub fn restore_outcome(&self) -> RestoreOutcome {
        self.cart.restore_outcome()
    }

    /// Catalog entries passing the active filter, in seeded order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.visible(&self.products)
    }

    /// Active filter token.
    pub fn active_filter(&self) -> &str {
        self.filter.active()
    }

    /// Whether the cart panel is open.
    pub fn panel_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Whether the page overlay is showing. Derived from the panel; the
    /// overlay has no independent state.
    pub fn overlay_visible(&self) -> bool {
        self.panel.is_open()
    }

    /// Whether the mobile nav menu is open.
    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    /// Current contact-form feedback.
    pub fn contact_feedback(&self) -> FormFeedback {
        self.contact.feedback()
    }

    /// Year rendered in the page footer.
    pub fn footer_year(&self) -> i32 {
        self.footer_year
    }

    /// Reveal tracking for scroll-animated sections.
    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    /// Mutable reveal tracking. Embedders without intersection reporting
    /// replace the default with [`RevealTracker::without_observer`].
    pub fn reveal_mut(&mut self) -> &mut RevealTracker {
        &mut self.reveal
    }
}
