//! API DTOs (Data Transfer Objects)

use kernel::id::CategoryId;
use serde::Serialize;

use crate::domain::entities::CategoryDraft;

/// Accepted category response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    /// Present on update only; creation ids are assigned by storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CategoryResponse {
    pub fn from_draft(id: Option<CategoryId>, draft: &CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name().to_string(),
            description: draft.description().to_string(),
            icon: draft.icon().map(str::to_string),
        }
    }
}
