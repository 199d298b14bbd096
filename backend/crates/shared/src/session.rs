//! Session record
//!
//! The authenticated user as handed over by the session collaborator.
//! Nothing in this workspace issues or verifies sessions; this is only the
//! shape other crates agree on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::UserId;

/// Signed-in user attached to a request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Bearer token for calls to the storefront API
    pub access_token: String,
}

impl SessionUser {
    pub fn new(user_id: UserId, access_token: impl Into<String>) -> Self {
        Self {
            user_id,
            name: None,
            email: None,
            image: None,
            access_token: access_token.into(),
        }
    }

    /// Name to show in the UI, falling back to the email address
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

impl fmt::Debug for SessionUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionUser")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("image", &self.image)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
