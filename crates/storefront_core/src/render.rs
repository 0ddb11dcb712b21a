//! Cart display rendering.
//!
//! # Responsibility
//! - Derive the typed display representation of the current cart state.
//! - Own currency formatting for the whole engine.
//!
//! # Invariants
//! - Rendering is a pure function of the cart; it never mutates state.
//! - Amounts are always two-decimal strings with the fixed `GHS` label.
//! - The empty cart renders zero totals plus the placeholder message.

use crate::model::cart::{Cart, LineItem};

/// Fixed currency label shown before every amount.
pub const CURRENCY_LABEL: &str = "GHS";

/// Placeholder shown instead of line rows when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Formats an amount as the site displays it, e.g. `GHS 25.50`.
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_LABEL} {amount:.2}")
}

/// Display row for one cart line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    /// Item name; doubles as the identity a remove action carries.
    pub name: String,
    /// Ordered quantity.
    pub qty: u32,
    /// Unit price, formatted (`GHS 10.00`).
    pub unit_price_label: String,
    /// `price * qty`, formatted.
    pub line_total_label: String,
}

/// Display representation of the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// One row per line item, in first-added order.
    pub lines: Vec<LineView>,
    /// Grand total over all lines, formatted.
    pub total_label: String,
    /// Total item count (sum of quantities) as a display string.
    pub count_label: String,
    /// Present only for the empty cart.
    pub placeholder: Option<&'static str>,
}

/// Recomputes the display representation for the given cart.
pub fn render_cart(cart: &Cart) -> CartView {
    let lines = cart.items().iter().map(render_line).collect();
    CartView {
        lines,
        total_label: format_amount(cart.total()),
        count_label: cart.count().to_string(),
        placeholder: if cart.is_empty() {
            Some(EMPTY_CART_MESSAGE)
        } else {
            None
        },
    }
}

fn render_line(item: &LineItem) -> LineView {
    LineView {
        name: item.name.clone(),
        qty: item.qty,
        unit_price_label: format_amount(item.price),
        line_total_label: format_amount(item.line_total()),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_amount, render_cart, EMPTY_CART_MESSAGE};
    use crate::model::cart::Cart;

    #[test]
    fn format_amount_keeps_two_decimals() {
        assert_eq!(format_amount(0.0), "GHS 0.00");
        assert_eq!(format_amount(5.5), "GHS 5.50");
        assert_eq!(format_amount(1234.567), "GHS 1234.57");
    }

    #[test]
    fn empty_cart_renders_placeholder_and_zero_totals() {
        let view = render_cart(&Cart::new());
        assert!(view.lines.is_empty());
        assert_eq!(view.total_label, "GHS 0.00");
        assert_eq!(view.count_label, "0");
        assert_eq!(view.placeholder, Some(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn line_rows_expose_unit_price_and_line_total() {
        let mut cart = Cart::new();
        cart.add("Widget", 10.0);
        cart.add("Widget", 10.0);

        let view = render_cart(&cart);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].qty, 2);
        assert_eq!(view.lines[0].unit_price_label, "GHS 10.00");
        assert_eq!(view.lines[0].line_total_label, "GHS 20.00");
        assert_eq!(view.placeholder, None);
    }
}
