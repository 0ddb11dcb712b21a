//! Category filter over the static product catalog.
//!
//! # Responsibility
//! - Hold the active filter selection (one pill at a time).
//! - Decide per-product visibility for rendering.
//!
//! # Invariants
//! - Exactly one filter is active; the default is [`FILTER_ALL`].
//! - Visibility uses substring matching against the product category,
//!   exactly like the original `category.includes(filter)` check.

use crate::model::product::Product;

/// The filter value that shows every product.
pub const FILTER_ALL: &str = "all";

/// Active-pill state for the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    active: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
        }
    }
}

impl ProductFilter {
    /// Starts with [`FILTER_ALL`] active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a filter pill. An empty value falls back to
    /// [`FILTER_ALL`], matching the original missing-attribute default.
    pub fn set(&mut self, filter: &str) {
        self.active = if filter.is_empty() {
            FILTER_ALL.to_string()
        } else {
            filter.to_string()
        };
    }

    /// The currently active filter value.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether the product stays visible under the active filter.
    pub fn shows(&self, product: &Product) -> bool {
        self.active == FILTER_ALL || product.category.contains(&self.active)
    }

    /// Products visible under the active filter, in catalog order.
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|product| self.shows(product))
            .collect()
    }
}
