//! Rule-table input validation
//!
//! Request bodies are checked against a static, ordered table of
//! [`ValidationRule`]s. Every rule normalizes its field in place (trim)
//! and then runs its checks in order, stopping at the first failing check
//! of that field. Failures of different fields are all collected.
//!
//! ```rust
//! use kernel::validation::{Check, ValidationRule, apply_rules};
//! use serde_json::json;
//!
//! const RULES: &[ValidationRule] = &[ValidationRule {
//!     field: "title",
//!     trim: true,
//!     optional: false,
//!     checks: &[Check::Required { message: "title is required" }],
//! }];
//!
//! let mut body = json!({ "title": "  " }).as_object().cloned().unwrap();
//! let outcome = apply_rules(RULES, &mut body);
//! assert_eq!(outcome.combined_message().as_deref(), Some("title is required"));
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::app_error::AppError;
use crate::error::kind::ErrorKind;

/// Separator placed between messages of a combined rejection
pub const MESSAGE_SEPARATOR: &str = ". ";

/// A single check applied to an already-normalized field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Value must be non-empty
    Required { message: &'static str },
    /// Value must be at most `max` characters (Unicode scalar values)
    MaxChars { max: usize, message: &'static str },
}

impl Check {
    fn passes(&self, value: &str) -> bool {
        match self {
            Check::Required { .. } => !value.is_empty(),
            Check::MaxChars { max, .. } => value.chars().count() <= *max,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Check::Required { message } | Check::MaxChars { message, .. } => *message,
        }
    }
}

/// Checks for one body field
///
/// # Invariants
/// - `checks` run in declaration order
/// - an `optional` field that is absent or empty after normalization is
///   not checked at all
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub field: &'static str,
    pub trim: bool,
    pub optional: bool,
    pub checks: &'static [Check],
}

impl ValidationRule {
    /// Run this rule, returning the message of the first failing check.
    fn evaluate(&self, value: &str) -> Option<&'static str> {
        if self.optional && value.is_empty() {
            return None;
        }
        self.checks
            .iter()
            .find(|check| !check.passes(value))
            .map(Check::message)
    }

    /// Normalize the field in place and return its textual value.
    ///
    /// Strings are trimmed, numbers and booleans take their JSON text.
    /// Anything else counts as absent and the key is dropped.
    fn normalize(&self, body: &mut Map<String, Value>) -> Option<String> {
        let text = match body.get(self.field) {
            Some(Value::String(s)) if self.trim => Some(trim_text(s).to_string()),
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            Some(_) | None => None,
        };
        match &text {
            Some(t) => {
                body.insert(self.field.to_string(), Value::String(t.clone()));
            }
            None => {
                body.remove(self.field);
            }
        }
        text
    }
}

/// Strip leading and trailing whitespace, including the byte-order mark
/// (U+FEFF) that `str::trim` keeps.
fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// A failed check, tied to the field it was declared for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Result of running a rule table over one request body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    violations: Vec<FieldViolation>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// All messages joined with [`MESSAGE_SEPARATOR`], `None` when valid
    pub fn combined_message(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message).collect();
        Some(messages.join(MESSAGE_SEPARATOR))
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self.combined_message() {
            None => Ok(()),
            Some(message) => Err(Rejection { message }),
        }
    }
}

/// Normalize `body` in place and evaluate every rule in table order.
pub fn apply_rules(rules: &[ValidationRule], body: &mut Map<String, Value>) -> ValidationOutcome {
    let violations = rules
        .iter()
        .filter_map(|rule| {
            let value = rule.normalize(body).unwrap_or_default();
            rule.evaluate(&value).map(|message| FieldViolation {
                field: rule.field,
                message,
            })
        })
        .collect();

    ValidationOutcome { violations }
}

/// Request rejected by validation
///
/// Always a client error (400); the message is the combined text of every
/// violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Rejection {
    message: String,
}

impl Rejection {
    pub const KIND: ErrorKind = ErrorKind::BadRequest;

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        Self::KIND.status_code()
    }
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        AppError::new(Rejection::KIND, rejection.message)
    }
}
