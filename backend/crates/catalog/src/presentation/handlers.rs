//! HTTP Handlers
//!
//! These run only after `validate_category_body` accepted the request, so
//! they read the validated category from request extensions.

use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use kernel::id::CategoryId;

use crate::domain::entities::CategoryDraft;
use crate::presentation::dto::CategoryResponse;

/// POST /api/categories
pub async fn create_category(
    Extension(draft): Extension<CategoryDraft>,
) -> (StatusCode, Json<CategoryResponse>) {
    tracing::info!(name = %draft.name(), "Category accepted for creation");

    (
        StatusCode::CREATED,
        Json(CategoryResponse::from_draft(None, &draft)),
    )
}

/// PUT /api/categories/{id}
pub async fn update_category(
    Path(id): Path<CategoryId>,
    Extension(draft): Extension<CategoryDraft>,
) -> Json<CategoryResponse> {
    tracing::info!(category_id = %id, name = %draft.name(), "Category accepted for update");

    Json(CategoryResponse::from_draft(Some(id), &draft))
}
