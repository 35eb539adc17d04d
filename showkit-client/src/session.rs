//! Explicit session credential.
//!
//! The backend issues a bearer token at login; the token travels inside
//! this object and is passed into [`crate::ApiClient`] explicitly. Nothing
//! reads credentials from ambient/global storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token issued at login.
    pub token: String,
    /// The logged-in user.
    pub user_id: String,
    /// Token expiry, if the backend communicated one.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Whether the token has expired at `now`. A session without a known
    /// expiry is treated as live; the backend is the authority either way.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|t| now >= t)
    }

    /// Value for the Authorization header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
