//! Error conversions - response rendering for [`AppError`]
//!
//! Resource crates map their own failures into [`AppError`]; this module
//! turns it into an HTTP response behind the `axum` feature.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_status() {
        use super::*;
        use axum::response::IntoResponse;

        let response = AppError::payload_too_large("too big").into_response();
        assert_eq!(response.status().as_u16(), 413);
    }
}
