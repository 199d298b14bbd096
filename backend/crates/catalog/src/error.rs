//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::Rejection;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more fields failed validation; the message lists all of them
    #[error("{0}")]
    ValidationFailed(#[from] Rejection),

    /// Body is not valid JSON
    #[error("Malformed JSON body")]
    MalformedBody(#[from] serde_json::Error),

    /// Body is valid JSON but not an object
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// Body exceeds the configured limit
    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Body could not be read from the connection
    #[error("Failed to read request body")]
    BodyRead(#[source] axum::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::ValidationFailed(_)
            | CatalogError::MalformedBody(_)
            | CatalogError::NotAnObject
            | CatalogError::BodyRead(_) => ErrorKind::BadRequest,
            CatalogError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            CatalogError::MalformedBody(_) | CatalogError::NotAnObject => {
                err.with_action("Send the category as a JSON object")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::BodyRead(e) => {
                tracing::warn!(error = %e, "Failed to read category request body");
            }
            CatalogError::PayloadTooLarge { limit } => {
                tracing::warn!(limit, "Category request body too large");
            }
            CatalogError::ValidationFailed(rejection) => {
                tracing::debug!(message = %rejection, "Category rejected");
            }
            CatalogError::MalformedBody(e) => {
                tracing::debug!(error = %e, "Malformed category request body");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::validation::{Check, ValidationRule, apply_rules};

    fn rejection() -> Rejection {
        const RULES: &[ValidationRule] = &[ValidationRule {
            field: "name",
            trim: true,
            optional: false,
            checks: &[Check::Required {
                message: "name is required",
            }],
        }];
        let mut body = serde_json::Map::new();
        apply_rules(RULES, &mut body).into_result().unwrap_err()
    }

    #[test]
    fn test_validation_failed_is_400_with_combined_message() {
        let err = CatalogError::from(rejection());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_app_error().message(), "name is required");
    }

    #[test]
    fn test_body_errors() {
        let json_err = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let err = CatalogError::from(json_err);
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.to_app_error().action().is_some());

        let err = CatalogError::PayloadTooLarge { limit: 16 };
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "Request body exceeds 16 bytes");
    }

    #[test]
    fn test_internal_is_500() {
        let err = CatalogError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_app_error().is_server_error());
    }
}
