//! Catalog (Category) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Validation rule table, validated category
//! - `application/` - Validation use case, configuration
//! - `presentation/` - Validation middleware, handlers, router
//!
//! ## Request Model
//! - Create/update bodies are validated before any handler runs
//! - Accepted bodies are re-serialized with trimmed values
//! - Rejected bodies get a single 400 problem response listing every failure
//! - Storage lives outside this crate; handlers only acknowledge

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use domain::entities::CategoryDraft;
pub use error::{CatalogError, CatalogResult};
pub use presentation::router::category_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod rules {
    pub use crate::domain::rules::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
