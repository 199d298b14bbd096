//! Application Configuration
//!
//! Configuration for the catalog application layer.

/// Default request body limit (100 KiB)
///
/// The limit applies to the raw body, before trimming, so it has to leave
/// room for padding and `\uXXXX` escapes around otherwise valid values.
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Largest create/update body the validator will buffer
    pub max_body_bytes: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl CatalogConfig {
    pub fn with_max_body_bytes(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }
}
