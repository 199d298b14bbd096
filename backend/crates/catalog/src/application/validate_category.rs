//! Validate Category Use Case
//!
//! Parses a raw create/update body, normalizes it in place and checks it
//! against the category rule table. Rejections are logged once, by
//! `CatalogError` when the response is written.

use kernel::validation::{ValidationRule, apply_rules};
use serde_json::{Map, Value};

use crate::domain::entities::CategoryDraft;
use crate::domain::rules::CATEGORY_RULES;
use crate::error::{CatalogError, CatalogResult};

/// Validate category output
#[derive(Debug, Clone)]
pub struct ValidateCategoryOutput {
    /// Accepted category with trimmed values
    pub draft: CategoryDraft,
    /// Full request body with the validated fields normalized;
    /// unknown keys are left as they came in
    pub body: Map<String, Value>,
}

/// Validate category use case
pub struct ValidateCategoryUseCase {
    rules: &'static [ValidationRule],
}

impl Default for ValidateCategoryUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidateCategoryUseCase {
    pub fn new() -> Self {
        Self {
            rules: CATEGORY_RULES,
        }
    }

    pub fn execute(&self, raw: &[u8]) -> CatalogResult<ValidateCategoryOutput> {
        let mut body = parse_body(raw)?;

        apply_rules(self.rules, &mut body).into_result()?;

        Ok(ValidateCategoryOutput {
            draft: CategoryDraft::from_normalized(&body),
            body,
        })
    }
}

/// An empty body is treated as `{}` so that required fields report
/// themselves instead of a parse error.
fn parse_body(raw: &[u8]) -> CatalogResult<Map<String, Value>> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(CatalogError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn run(body: Value) -> CatalogResult<ValidateCategoryOutput> {
        let raw = serde_json::to_vec(&body).unwrap();
        ValidateCategoryUseCase::new().execute(&raw)
    }

    fn rejection_message(body: Value) -> String {
        match run(body) {
            Err(CatalogError::ValidationFailed(rejection)) => rejection.message().to_string(),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_category_passes() {
        let output = assert_ok!(run(json!({
            "name": "Shoes",
            "description": "Everything you walk in",
            "icon": "boot"
        })));
        assert_eq!(output.draft.name(), "Shoes");
        assert_eq!(output.draft.icon(), Some("boot"));
    }

    #[test]
    fn test_trimmed_values_reach_downstream() {
        let output = assert_ok!(run(json!({
            "name": "  Trimmed  ",
            "description": "valid desc"
        })));
        assert_eq!(output.draft.name(), "Trimmed");
        assert_eq!(output.body["name"], "Trimmed");
        assert!(!output.body.contains_key("icon"));
        assert_eq!(output.draft.icon(), None);
    }

    #[test]
    fn test_missing_name() {
        let message = rejection_message(json!({ "description": "valid" }));
        assert_eq!(message, "name is required");
    }

    #[test]
    fn test_all_empty_skips_icon() {
        let message = rejection_message(json!({ "name": "", "description": "", "icon": "" }));
        assert_eq!(message, "name is required. description is required");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let message = rejection_message(json!({ "name": "   ", "description": "\t\n" }));
        assert_eq!(message, "name is required. description is required");
    }

    #[test]
    fn test_byte_order_mark_only_is_empty() {
        let message = rejection_message(json!({ "name": "\u{FEFF}", "description": "ok" }));
        assert_eq!(message, "name is required");
    }

    #[test]
    fn test_name_too_long() {
        let message = rejection_message(json!({
            "name": "A".repeat(101),
            "description": "valid",
            "icon": "ok"
        }));
        assert_eq!(message, "name exceeds 100 characters");
    }

    #[test]
    fn test_limits_are_inclusive() {
        assert_ok!(run(json!({
            "name": "A".repeat(100),
            "description": "D".repeat(500),
            "icon": "I".repeat(50)
        })));
    }

    #[test]
    fn test_padding_does_not_count_toward_length() {
        assert_ok!(run(json!({
            "name": format!("  {}  ", "A".repeat(100)),
            "description": "valid"
        })));
    }

    #[test]
    fn test_icon_too_long() {
        let message = rejection_message(json!({
            "name": "ok",
            "description": "ok",
            "icon": "A".repeat(51)
        }));
        assert_eq!(message, "icon exceeds 50 characters");
    }

    #[test]
    fn test_all_three_fail_in_declaration_order() {
        let message = rejection_message(json!({
            "icon": "A".repeat(51),
            "description": "D".repeat(501),
            "name": "N".repeat(101)
        }));
        assert_eq!(
            message,
            "name exceeds 100 characters. description exceeds 500 characters. icon exceeds 50 characters"
        );
    }

    #[test]
    fn test_idempotent() {
        let body = json!({ "name": "", "description": "x", "icon": "A".repeat(60) });
        assert_eq!(rejection_message(body.clone()), rejection_message(body));

        let first = assert_ok!(run(json!({ "name": " a ", "description": " b " })));
        let second = assert_ok!(run(Value::Object(first.body.clone())));
        assert_eq!(first.draft, second.draft);
        assert_eq!(first.body, second.body);
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let output = assert_ok!(run(json!({
            "name": "a",
            "description": "b",
            "parentId": 7
        })));
        assert_eq!(output.body["parentId"], 7);
    }

    #[test]
    fn test_empty_body_reports_required_fields() {
        let result = ValidateCategoryUseCase::new().execute(b"  ");
        match result {
            Err(CatalogError::ValidationFailed(rejection)) => {
                assert_eq!(rejection.message(), "name is required. description is required");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_and_non_object_bodies() {
        let err = assert_err!(ValidateCategoryUseCase::new().execute(b"{\"name\":"));
        assert!(matches!(err, CatalogError::MalformedBody(_)));

        let err = assert_err!(ValidateCategoryUseCase::new().execute(b"[1, 2]"));
        assert!(matches!(err, CatalogError::NotAnObject));
    }
}
