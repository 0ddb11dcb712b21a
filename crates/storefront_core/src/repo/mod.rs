//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the cart persistence contract.
//! - Isolate SQLite and payload-encoding details from service
//!   orchestration.
//!
//! # Invariants
//! - Read paths report undecodable persisted state as a typed error
//!   instead of masking it; the forgiving empty-cart fallback lives one
//!   layer up, in the service.

pub mod cart_repo;
