//! Application Layer
//!
//! Use cases and application configuration.

pub mod config;
pub mod validate_category;

// Re-exports
pub use config::CatalogConfig;
pub use validate_category::{ValidateCategoryOutput, ValidateCategoryUseCase};
