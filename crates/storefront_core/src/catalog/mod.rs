//! Catalog filtering entry points.
//!
//! # Responsibility
//! - Track the active filter pill and derive product visibility.
//! - Keep filter semantics identical to the original site (substring
//!   category match).

pub mod filter;
