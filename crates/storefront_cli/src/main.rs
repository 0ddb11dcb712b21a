//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the storefront engine end to end against an in-memory
//!   database: restore, add, remove, filter, contact simulation.
//! - Keep output deterministic for quick local sanity checks.

use storefront_core::db::open_db_in_memory;
use storefront_core::{
    CartView, Command, Product, SqliteCartRepository, Storefront, SUBMIT_DELAY_MS,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("storefront smoke run failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("storefront_core version={}", storefront_core::core_version());

    let conn = open_db_in_memory()?;
    let repo = SqliteCartRepository::try_new(&conn)?;
    let mut page = Storefront::new(repo, demo_catalog())?;
    println!("restore outcome: {:?}", page.restore_outcome());

    // Scripted timeline in epoch milliseconds, starting at zero.
    page.dispatch(
        Command::add_to_cart_from_metadata(Some("Rice 5kg"), Some("120.00")),
        0,
    )?;
    page.dispatch(
        Command::add_to_cart_from_metadata(Some("Rice 5kg"), Some("120.00")),
        0,
    )?;
    page.dispatch(
        Command::add_to_cart_from_metadata(Some("Cooking Oil 1L"), Some("45.50")),
        0,
    )?;
    println!("panel open after add: {}", page.panel_open());
    print_cart("after three adds", &page.cart_view());

    page.dispatch(
        Command::RemoveFromCart {
            name: "Cooking Oil 1L".to_string(),
        },
        0,
    )?;
    print_cart("after remove", &page.cart_view());

    page.dispatch(
        Command::apply_filter_from_metadata(Some("provisions")),
        0,
    )?;
    println!("filter `{}` shows:", page.active_filter());
    for product in page.visible_products() {
        println!("  {} ({})", product.name, product.category);
    }

    page.dispatch(Command::SubmitContactForm, 0)?;
    println!(
        "contact feedback at t=0: {:?}",
        page.contact_feedback().message()
    );
    page.pump_deferred(SUBMIT_DELAY_MS);
    println!(
        "contact feedback at t={SUBMIT_DELAY_MS}: {:?}",
        page.contact_feedback().message()
    );

    page.dispatch(Command::DismissOverlay, SUBMIT_DELAY_MS)?;
    println!("panel open after dismiss: {}", page.panel_open());

    Ok(())
}

fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("Rice 5kg", 120.00, "provisions"),
        Product::new("Cooking Oil 1L", 45.50, "provisions"),
        Product::new("Sachet Water Pack", 8.00, "drinks"),
        Product::new("Laundry Soap", 12.75, "household"),
    ]
}

fn print_cart(label: &str, view: &CartView) {
    println!("cart {label}: total={} count={}", view.total_label, view.count_label);
    for line in &view.lines {
        println!(
            "  {} x{} @ {} = {}",
            line.name, line.qty, line.unit_price_label, line.line_total_label
        );
    }
    if let Some(placeholder) = view.placeholder {
        println!("  {placeholder}");
    }
}
