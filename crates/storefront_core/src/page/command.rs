//! Explicit trigger commands for the page controller.
//!
//! # Responsibility
//! - Replace the original attribute-tagged button dispatch with typed
//!   command objects the UI layer constructs.
//! - Normalize raw trigger metadata (missing names, unparseable prices)
//!   exactly the way the site script did.

use crate::model::cart::DEFAULT_ITEM_NAME;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid leading float regex")
});

/// One activation event from the trigger surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add one unit of the named product to the cart.
    AddToCart { name: String, price: f64 },
    /// Remove the named line item; absent names are a silent no-op.
    RemoveFromCart { name: String },
    /// Show the cart panel (and its overlay).
    OpenCartPanel,
    /// Hide the cart panel.
    CloseCartPanel,
    /// Overlay click: hides the cart panel and the mobile nav.
    DismissOverlay,
    /// Menu button: toggles the mobile nav.
    ToggleNavMenu,
    /// A nav link was followed: the mobile nav closes.
    NavLinkActivated,
    /// Activate a filter pill.
    ApplyFilter { filter: String },
    /// Start one simulated contact-form submission.
    SubmitContactForm,
}

impl Command {
    /// Builds an add command from raw trigger metadata.
    ///
    /// Matches the original attribute handling: a missing or empty name
    /// falls back to [`DEFAULT_ITEM_NAME`]; the price string is parsed
    /// with leading-float semantics and anything unparseable becomes 0.
    pub fn add_to_cart_from_metadata(name: Option<&str>, price: Option<&str>) -> Self {
        let name = match name {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => DEFAULT_ITEM_NAME.to_string(),
        };
        let price = parse_price(price.unwrap_or("0"));
        Self::AddToCart { name, price }
    }

    /// Builds a filter command from raw pill metadata; a missing value
    /// falls back to `"all"`.
    pub fn apply_filter_from_metadata(filter: Option<&str>) -> Self {
        Self::ApplyFilter {
            filter: filter.unwrap_or("all").to_string(),
        }
    }
}

/// Parses a price attribute the way `parseFloat(value) || 0` did: the
/// longest leading float wins, everything else (including overflow to
/// infinity) is 0.
pub fn parse_price(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let Some(matched) = LEADING_FLOAT_RE.find(trimmed) else {
        return 0.0;
    };

    let parsed: f64 = matched.as_str().parse().unwrap_or(0.0);
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_price, Command};

    #[test]
    fn parse_price_accepts_plain_and_leading_floats() {
        assert_eq!(parse_price("12.5"), 12.5);
        assert_eq!(parse_price("  55"), 55.0);
        assert_eq!(parse_price("10.00 GHS"), 10.0);
        assert_eq!(parse_price(".5"), 0.5);
        assert_eq!(parse_price("-3.25"), -3.25);
        assert_eq!(parse_price("2e2"), 200.0);
    }

    #[test]
    fn parse_price_falls_back_to_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("free"), 0.0);
        assert_eq!(parse_price("GHS 10"), 0.0);
        assert_eq!(parse_price("1e999"), 0.0);
    }

    #[test]
    fn add_metadata_applies_original_defaults() {
        assert_eq!(
            Command::add_to_cart_from_metadata(None, None),
            Command::AddToCart {
                name: "Item".to_string(),
                price: 0.0,
            }
        );
        assert_eq!(
            Command::add_to_cart_from_metadata(Some(""), Some("oops")),
            Command::AddToCart {
                name: "Item".to_string(),
                price: 0.0,
            }
        );
        assert_eq!(
            Command::add_to_cart_from_metadata(Some("Eco Tote"), Some("25.00")),
            Command::AddToCart {
                name: "Eco Tote".to_string(),
                price: 25.0,
            }
        );
    }

    #[test]
    fn filter_metadata_falls_back_to_all() {
        assert_eq!(
            Command::apply_filter_from_metadata(None),
            Command::ApplyFilter {
                filter: "all".to_string(),
            }
        );
    }
}
