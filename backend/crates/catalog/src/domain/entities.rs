//! Domain Entities

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::rules::{DESCRIPTION_FIELD, ICON_FIELD, NAME_FIELD};

/// Category payload that passed validation
///
/// Values are already trimmed. An empty icon is stored as `None`.
/// Only the validation use case builds this, so holding one means the
/// rule table accepted the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    name: String,
    description: String,
    icon: Option<String>,
}

impl CategoryDraft {
    /// Build from a body that `CATEGORY_RULES` already normalized and accepted
    pub(crate) fn from_normalized(body: &Map<String, Value>) -> Self {
        let text = |field: &str| {
            body.get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let icon = text(ICON_FIELD);

        Self {
            name: text(NAME_FIELD),
            description: text(DESCRIPTION_FIELD),
            icon: (!icon.is_empty()).then_some(icon),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}
