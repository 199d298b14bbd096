//! Category Validation Middleware
//!
//! Buffers the request body, runs the category rule table and either
//! rejects the request or forwards it with the normalized body and a
//! [`CategoryDraft`] in its extensions.
//!
//! [`CategoryDraft`]: crate::domain::entities::CategoryDraft

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderValue, Request, header};
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::LengthLimitError;
use std::sync::Arc;

use crate::application::config::CatalogConfig;
use crate::application::validate_category::ValidateCategoryUseCase;
use crate::error::{CatalogError, CatalogResult};

/// Middleware state
#[derive(Clone)]
pub struct CategoryMiddlewareState {
    pub config: Arc<CatalogConfig>,
}

/// Middleware that validates category create/update bodies
///
/// Nothing downstream runs when validation fails.
pub async fn validate_category_body(
    State(state): State<CategoryMiddlewareState>,
    req: Request<Body>,
    next: Next,
) -> CatalogResult<Response> {
    let (mut parts, body) = req.into_parts();
    let limit = state.config.max_body_bytes;

    if declared_length(&parts.headers).is_some_and(|len| len > limit) {
        return Err(CatalogError::PayloadTooLarge { limit });
    }

    let raw = read_body(body, limit).await?;
    let output = ValidateCategoryUseCase::new().execute(&raw)?;

    let normalized = serde_json::to_vec(&output.body)
        .map_err(|e| CatalogError::Internal(format!("Failed to re-encode category: {e}")))?;

    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    parts
        .headers
        .insert(header::CONTENT_LENGTH, HeaderValue::from(normalized.len()));
    parts.extensions.insert(output.draft);

    Ok(next.run(Request::from_parts(parts, Body::from(normalized))).await)
}

fn declared_length(headers: &axum::http::HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

async fn read_body(body: Body, limit: usize) -> CatalogResult<Bytes> {
    axum::body::to_bytes(body, limit).await.map_err(|err| {
        if exceeded_limit(&err) {
            CatalogError::PayloadTooLarge { limit }
        } else {
            CatalogError::BodyRead(err)
        }
    })
}

fn exceeded_limit(err: &axum::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}
