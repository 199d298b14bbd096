//! Category Validation Rules
//!
//! Order matters: violations are reported in the order fields are declared
//! here (name, description, icon).

use kernel::validation::{Check, ValidationRule};

// ============================================================================
// Constants
// ============================================================================

pub const NAME_FIELD: &str = "name";
pub const DESCRIPTION_FIELD: &str = "description";
pub const ICON_FIELD: &str = "icon";

/// Maximum length for category name (in characters)
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum length for category description (in characters)
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Maximum length for category icon identifier (in characters)
pub const ICON_MAX_CHARS: usize = 50;

// ============================================================================
// Rule table
// ============================================================================

/// Rules applied to category create/update bodies
pub const CATEGORY_RULES: &[ValidationRule] = &[
    ValidationRule {
        field: NAME_FIELD,
        trim: true,
        optional: false,
        checks: &[
            Check::Required {
                message: "name is required",
            },
            Check::MaxChars {
                max: NAME_MAX_CHARS,
                message: "name exceeds 100 characters",
            },
        ],
    },
    ValidationRule {
        field: DESCRIPTION_FIELD,
        trim: true,
        optional: false,
        checks: &[
            Check::Required {
                message: "description is required",
            },
            Check::MaxChars {
                max: DESCRIPTION_MAX_CHARS,
                message: "description exceeds 500 characters",
            },
        ],
    },
    ValidationRule {
        field: ICON_FIELD,
        trim: true,
        optional: true,
        checks: &[Check::MaxChars {
            max: ICON_MAX_CHARS,
            message: "icon exceeds 50 characters",
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let fields: Vec<&str> = CATEGORY_RULES.iter().map(|r| r.field).collect();
        assert_eq!(fields, [NAME_FIELD, DESCRIPTION_FIELD, ICON_FIELD]);
    }

    #[test]
    fn test_messages_match_limits() {
        for rule in CATEGORY_RULES {
            for check in rule.checks {
                if let Check::MaxChars { max, message } = check {
                    assert_eq!(*message, format!("{} exceeds {max} characters", rule.field));
                }
            }
        }
    }

    #[test]
    fn test_only_icon_is_optional() {
        let optional: Vec<&str> = CATEGORY_RULES
            .iter()
            .filter(|r| r.optional)
            .map(|r| r.field)
            .collect();
        assert_eq!(optional, [ICON_FIELD]);
        assert!(CATEGORY_RULES.iter().all(|r| r.trim));
    }
}
