//! Cart domain model.
//!
//! # Responsibility
//! - Define the line-item record and the ordered cart that owns it.
//! - Enforce cart invariants on every mutation and on restore.
//!
//! # Invariants
//! - `name` is the unique key; adding an existing name increments `qty`
//!   instead of appending a duplicate entry.
//! - `qty >= 1` for every stored item.
//! - `price` is finite and non-negative; malformed input is normalized,
//!   never rejected.
//! - Iteration order is first-added order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fallback name applied when an add command carries an empty name.
pub const DEFAULT_ITEM_NAME: &str = "Item";

/// One named product entry in the cart.
///
/// The serde shape (`name`/`price`/`qty`) matches the JSON objects the
/// original shop site stored, so previously persisted carts keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique key within one cart.
    pub name: String,
    /// Unit price in GHS. Finite and non-negative once inside a [`Cart`].
    pub price: f64,
    /// Ordered quantity, always >= 1 once inside a [`Cart`].
    pub qty: u32,
}

impl LineItem {
    /// Line total (`price * qty`) for display summaries.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// Violation found while validating restored line items.
#[derive(Debug, Clone, PartialEq)]
pub enum CartDataError {
    /// An item name is the empty string.
    EmptyName,
    /// The same name appears on more than one item.
    DuplicateName(String),
    /// An item carries `qty == 0`.
    ZeroQuantity { name: String },
    /// An item price is negative or not finite.
    InvalidPrice { name: String, price: f64 },
}

impl Display for CartDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "line item with empty name"),
            Self::DuplicateName(name) => write!(f, "duplicate line item name `{name}`"),
            Self::ZeroQuantity { name } => write!(f, "line item `{name}` has qty 0"),
            Self::InvalidPrice { name, price } => {
                write!(f, "line item `{name}` has invalid price {price}")
            }
        }
    }
}

impl Error for CartDataError {}

/// Result of one add operation, used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was appended with `qty = 1`.
    Appended,
    /// An existing line item absorbed the add; `qty` is the new quantity.
    Merged { qty: u32 },
}

/// Ordered, name-unique collection of line items.
///
/// Items are private so the invariants above cannot be broken from
/// outside; all mutation goes through [`Cart::add`] and [`Cart::remove`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from already-materialized items, validating every
    /// invariant. Used by the restore path; any violation means the
    /// persisted payload is treated as corrupt as a whole.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CartDataError> {
        for (index, item) in items.iter().enumerate() {
            if item.name.is_empty() {
                return Err(CartDataError::EmptyName);
            }
            if item.qty == 0 {
                return Err(CartDataError::ZeroQuantity {
                    name: item.name.clone(),
                });
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CartDataError::InvalidPrice {
                    name: item.name.clone(),
                    price: item.price,
                });
            }
            if items[..index].iter().any(|prior| prior.name == item.name) {
                return Err(CartDataError::DuplicateName(item.name.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Adds one unit of the named product.
    ///
    /// Input is normalized, never rejected: an empty name becomes
    /// [`DEFAULT_ITEM_NAME`], a negative or non-finite price becomes 0.
    /// An existing name keeps its originally captured price and only the
    /// quantity grows.
    pub fn add(&mut self, name: impl Into<String>, price: f64) -> AddOutcome {
        let name = normalize_item_name(name.into());
        let price = normalize_price(price);

        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            existing.qty = existing.qty.saturating_add(1);
            return AddOutcome::Merged { qty: existing.qty };
        }

        self.items.push(LineItem {
            name,
            price,
            qty: 1,
        });
        AddOutcome::Appended
    }

    /// Removes the item whose name matches exactly.
    ///
    /// Returns whether anything was removed; an absent name is a silent
    /// no-op, not an error.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        self.items.len() != before
    }

    /// Line items in first-added order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Grand total: sum of `price * qty` over all items.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Item count: sum of quantities (not the number of lines).
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the cart holds no items (the Empty display state).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Applies the add-command name fallback. Only the empty string falls
/// back; whitespace-only names are kept verbatim like the original site.
pub fn normalize_item_name(name: String) -> String {
    if name.is_empty() {
        DEFAULT_ITEM_NAME.to_string()
    } else {
        name
    }
}

/// Coerces malformed prices (negative, NaN, infinite) to 0.
pub fn normalize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}
