//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use middleware::{CategoryMiddlewareState, validate_category_body};
pub use router::category_router;
