//! Catalog product model.
//!
//! Products are static display data supplied by the embedding UI (the
//! original site kept them as HTML cards); the engine only needs the
//! fields that drive add-to-cart metadata and filter visibility.

/// One product card in the shop catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Display name; becomes the cart line-item key when added.
    pub name: String,
    /// Unit price in GHS.
    pub price: f64,
    /// Free-form category string matched by substring against the active
    /// filter (a card may pack several categories into one string).
    pub category: String,
}

impl Product {
    /// Creates a product card.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}
