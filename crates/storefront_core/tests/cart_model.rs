use serde_json::json;
use storefront_core::{AddOutcome, Cart, CartDataError, LineItem, DEFAULT_ITEM_NAME};

#[test]
fn add_appends_new_items_in_first_added_order() {
    let mut cart = Cart::new();
    assert_eq!(cart.add("Widget", 10.0), AddOutcome::Appended);
    assert_eq!(cart.add("Gadget", 5.5), AddOutcome::Appended);

    let names: Vec<_> = cart.items().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Widget", "Gadget"]);
    assert_eq!(cart.len(), 2);
}

#[test]
fn adding_existing_name_merges_quantity_instead_of_duplicating() {
    let mut cart = Cart::new();
    cart.add("Widget", 10.0);
    let outcome = cart.add("Widget", 10.0);

    assert_eq!(outcome, AddOutcome::Merged { qty: 2 });
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].qty, 2);
}

#[test]
fn merged_add_keeps_the_originally_captured_price() {
    let mut cart = Cart::new();
    cart.add("Widget", 10.0);
    cart.add("Widget", 99.0);

    assert_eq!(cart.items()[0].price, 10.0);
    assert_eq!(cart.total(), 20.0);
}

#[test]
fn empty_name_falls_back_and_whitespace_names_stay_verbatim() {
    let mut cart = Cart::new();
    cart.add("", 3.0);
    cart.add("  ", 4.0);

    assert_eq!(cart.items()[0].name, DEFAULT_ITEM_NAME);
    assert_eq!(cart.items()[1].name, "  ");
    assert_eq!(cart.len(), 2);
}

#[test]
fn malformed_prices_coerce_to_zero() {
    let mut cart = Cart::new();
    cart.add("Negative", -5.0);
    cart.add("NotANumber", f64::NAN);
    cart.add("Infinite", f64::INFINITY);

    for item in cart.items() {
        assert_eq!(item.price, 0.0);
    }
    assert_eq!(cart.total(), 0.0);
    assert_eq!(cart.count(), 3);
}

#[test]
fn remove_deletes_exact_name_match_only() {
    let mut cart = Cart::new();
    cart.add("Widget", 10.0);
    cart.add("Widget Pro", 15.0);

    assert!(cart.remove("Widget"));
    let names: Vec<_> = cart.items().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Widget Pro"]);
}

#[test]
fn removing_missing_name_is_a_silent_noop() {
    let mut cart = Cart::new();
    cart.add("Widget", 10.0);

    assert!(!cart.remove("Gadget"));
    assert_eq!(cart.len(), 1);
}

#[test]
fn remove_drops_the_whole_line_not_one_unit() {
    let mut cart = Cart::new();
    cart.add("Widget", 10.0);
    cart.add("Widget", 10.0);
    cart.add("Widget", 10.0);

    assert!(cart.remove("Widget"));
    assert!(cart.is_empty());
    assert_eq!(cart.count(), 0);
}

#[test]
fn total_and_count_track_operation_sequences() {
    let mut cart = Cart::new();
    assert_eq!(cart.total(), 0.0);
    assert_eq!(cart.count(), 0);

    cart.add("Widget", 10.0);
    cart.add("Widget", 10.0);
    cart.add("Gadget", 5.5);
    assert_eq!(cart.total(), 25.5);
    assert_eq!(cart.count(), 3);

    cart.remove("Widget");
    assert_eq!(cart.total(), 5.5);
    assert_eq!(cart.count(), 1);

    cart.remove("Gadget");
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn cart_serializes_as_the_bare_legacy_array() {
    let mut cart = Cart::new();
    cart.add("Widget", 10.0);
    cart.add("Widget", 10.0);
    cart.add("Gadget", 5.5);

    let encoded = serde_json::to_value(&cart).unwrap();
    assert_eq!(
        encoded,
        json!([
            { "name": "Widget", "price": 10.0, "qty": 2 },
            { "name": "Gadget", "price": 5.5, "qty": 1 }
        ])
    );
}

#[test]
fn from_items_accepts_invariant_respecting_items() {
    let cart = Cart::from_items(vec![
        line("Widget", 10.0, 2),
        line("Gadget", 5.5, 1),
    ])
    .unwrap();

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), 25.5);
}

#[test]
fn from_items_rejects_each_invariant_violation() {
    let empty_name = Cart::from_items(vec![line("", 1.0, 1)]).unwrap_err();
    assert_eq!(empty_name, CartDataError::EmptyName);

    let zero_qty = Cart::from_items(vec![line("Widget", 1.0, 0)]).unwrap_err();
    assert!(matches!(zero_qty, CartDataError::ZeroQuantity { name } if name == "Widget"));

    let negative = Cart::from_items(vec![line("Widget", -1.0, 1)]).unwrap_err();
    assert!(matches!(negative, CartDataError::InvalidPrice { .. }));

    let not_finite = Cart::from_items(vec![line("Widget", f64::NAN, 1)]).unwrap_err();
    assert!(matches!(not_finite, CartDataError::InvalidPrice { .. }));

    let duplicate = Cart::from_items(vec![
        line("Widget", 1.0, 1),
        line("Widget", 2.0, 1),
    ])
    .unwrap_err();
    assert!(matches!(duplicate, CartDataError::DuplicateName(name) if name == "Widget"));
}

#[test]
fn line_total_multiplies_price_by_quantity() {
    assert_eq!(line("Widget", 10.0, 3).line_total(), 30.0);
    assert_eq!(line("Free", 0.0, 5).line_total(), 0.0);
}

fn line(name: &str, price: f64, qty: u32) -> LineItem {
    LineItem {
        name: name.to_string(),
        price,
        qty,
    }
}
