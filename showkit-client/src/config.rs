//! API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where and how to reach the booking backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Configuration for a custom backend URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Local development backend.
    pub fn local() -> Self {
        Self::new("http://localhost:5000/api")
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::local()
    }
}
