//! Domain model for the storefront engine.
//!
//! # Responsibility
//! - Define the canonical cart and catalog data structures used by the
//!   engine's business logic.
//! - Keep cart invariants enforceable in one place.
//!
//! # Invariants
//! - Cart line items are unique by `name` and keep first-added order.
//! - Quantities are always >= 1; prices are finite and non-negative.

pub mod cart;
pub mod product;
