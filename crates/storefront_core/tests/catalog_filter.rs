use storefront_core::{Product, ProductFilter, FILTER_ALL};

#[test]
fn default_filter_shows_every_product() {
    let filter = ProductFilter::default();
    let products = demo_products();

    assert_eq!(filter.active(), FILTER_ALL);
    assert_eq!(filter.visible(&products).len(), products.len());
}

#[test]
fn category_matching_is_substring_based() {
    let mut filter = ProductFilter::new();
    filter.set("drink");

    let products = demo_products();
    let visible: Vec<_> = filter
        .visible(&products)
        .into_iter()
        .map(|product| product.name.as_str())
        .collect();

    assert_eq!(visible, vec!["Sachet Water Pack", "Malt Drink Crate"]);
}

#[test]
fn non_matching_filter_hides_everything() {
    let mut filter = ProductFilter::new();
    filter.set("electronics");

    assert!(filter.visible(&demo_products()).is_empty());
}

#[test]
fn empty_filter_value_falls_back_to_all() {
    let mut filter = ProductFilter::new();
    filter.set("drinks");
    filter.set("");

    assert_eq!(filter.active(), FILTER_ALL);
    assert_eq!(filter.visible(&demo_products()).len(), demo_products().len());
}

#[test]
fn visible_preserves_catalog_order() {
    let mut filter = ProductFilter::new();
    filter.set("provisions");

    let products = demo_products();
    let visible: Vec<_> = filter
        .visible(&products)
        .into_iter()
        .map(|product| product.name.as_str())
        .collect();

    assert_eq!(visible, vec!["Rice 5kg", "Cooking Oil 1L"]);
}

#[test]
fn active_tracks_the_last_applied_value() {
    let mut filter = ProductFilter::new();
    filter.set("household");
    assert_eq!(filter.active(), "household");

    filter.set("drinks");
    assert_eq!(filter.active(), "drinks");
}

fn demo_products() -> Vec<Product> {
    vec![
        Product::new("Rice 5kg", 120.00, "provisions"),
        Product::new("Sachet Water Pack", 8.00, "drinks"),
        Product::new("Cooking Oil 1L", 45.50, "provisions"),
        Product::new("Malt Drink Crate", 95.00, "drinks"),
        Product::new("Laundry Soap", 12.75, "household"),
    ]
}
