//! Engine use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations and repository calls into use-case level
//!   APIs.
//! - Keep the controller decoupled from storage and timing details.

pub mod cart_service;
pub mod contact_service;
