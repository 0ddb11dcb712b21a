//! Cart use-case service.
//!
//! # Responsibility
//! - Own the live cart instance and keep it persisted across mutations.
//! - Apply the forgiving restore policy on top of strict repository
//!   reads.
//!
//! # Invariants
//! - Every mutation persists before returning (the original site saved to
//!   localStorage inside each handler).
//! - A corrupt persisted slot falls back to an empty cart and is reported
//!   through logging, never as an error to the caller.
//! - The corrupt slot value stays in place until the next persist
//!   overwrites it.

use crate::model::cart::{AddOutcome, Cart};
use crate::render::{render_cart, CartView};
use crate::repo::cart_repo::{CartRepository, RepoError, RepoResult};
use log::{info, warn};

/// How the cart came to life at service construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing was persisted; started empty.
    Fresh,
    /// The persisted cart loaded cleanly.
    Restored { lines: usize },
    /// The slot existed but was undecodable; started empty.
    Recovered,
}

/// Use-case facade owning the cart and its persistence.
pub struct CartService<R: CartRepository> {
    repo: R,
    cart: Cart,
    restore_outcome: RestoreOutcome,
}

impl<R: CartRepository> CartService<R> {
    /// Creates the service by restoring the persisted cart.
    ///
    /// Restore failures caused by corrupt data degrade to an empty cart;
    /// genuine storage failures propagate for the embedder to handle at
    /// startup.
    pub fn restore(repo: R) -> RepoResult<Self> {
        let (cart, restore_outcome) = match repo.load_cart() {
            Ok(Some(cart)) => {
                let lines = cart.len();
                (cart, RestoreOutcome::Restored { lines })
            }
            Ok(None) => (Cart::new(), RestoreOutcome::Fresh),
            Err(RepoError::CorruptSlot { slot, reason }) => {
                warn!(
                    "event=cart_restore module=cart status=recovered slot={slot} reason={reason}"
                );
                (Cart::new(), RestoreOutcome::Recovered)
            }
            Err(other) => return Err(other),
        };

        info!(
            "event=cart_restore module=cart status=ok outcome={} lines={} count={}",
            restore_outcome.as_log_str(),
            cart.len(),
            cart.count()
        );

        Ok(Self {
            repo,
            cart,
            restore_outcome,
        })
    }

    /// Adds one unit of the named product, then persists.
    ///
    /// Malformed input is normalized by the cart model, never rejected.
    pub fn add_item(&mut self, name: &str, price: f64) -> RepoResult<AddOutcome> {
        let outcome = self.cart.add(name, price);
        self.repo.save_cart(&self.cart)?;

        info!(
            "event=cart_add module=cart status=ok merged={} lines={} count={}",
            matches!(outcome, AddOutcome::Merged { .. }),
            self.cart.len(),
            self.cart.count()
        );
        Ok(outcome)
    }

    /// Removes the exact-name match, then persists.
    ///
    /// An absent name is a silent no-op; the cart is persisted either way
    /// to match the original handler.
    pub fn remove_item(&mut self, name: &str) -> RepoResult<bool> {
        let removed = self.cart.remove(name);
        self.repo.save_cart(&self.cart)?;

        info!(
            "event=cart_remove module=cart status=ok removed={} lines={} count={}",
            removed,
            self.cart.len(),
            self.cart.count()
        );
        Ok(removed)
    }

    /// Current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Recomputes the display representation of the current cart.
    pub fn view(&self) -> CartView {
        render_cart(&self.cart)
    }

    /// How the cart was initialized (for diagnostics and tests).
    pub fn restore_outcome(&self) -> RestoreOutcome {
        self.restore_outcome
    }
}

impl RestoreOutcome {
    fn as_log_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Restored { .. } => "restored",
            Self::Recovered => "recovered",
        }
    }
}
