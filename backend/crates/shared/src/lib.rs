//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of storefront vocabulary:
//! - Common error types and result aliases
//! - Typed ID wrappers
//! - The rule-table input validator used by resource endpoints
//! - The session record handed around by the auth collaborator
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all resources.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod session;
pub mod validation;
