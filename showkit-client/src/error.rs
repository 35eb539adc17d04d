//! Error types for backend API operations.
//!
//! Structured so the front-end can distinguish "log in again" from "try
//! again later" from "tell the user the booking is gone" without string
//! matching.

pub type Result<T> = std::result::Result<T, ClientError>;

/// Error type for Showkit API and cache operations.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Transport/network layer error.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request timed out.
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        /// Operation that timed out
        operation: String,
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Authentication or authorization failed.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Session expired; the user must log in again.
    #[error("session expired, please log in again")]
    SessionExpired,

    /// Resource not found (booking, theatre, review, ...).
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Type of resource (e.g. "booking", "review")
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// The backend rejected the request data.
    #[error("invalid {field}: {reason}")]
    InvalidData {
        /// Field or parameter name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A payment action failed.
    #[error("payment for booking {booking_id} failed: {reason}")]
    Payment {
        /// Booking the payment belongs to
        booking_id: String,
        /// Failure reason
        reason: String,
    },

    /// Rate limited; retry after the given delay.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited {
        /// Suggested retry delay in milliseconds
        retry_after_ms: u64,
    },

    /// Any other non-success response from the backend.
    #[error("backend returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Body message if one was provided
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Local cache operation failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal/unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Returns true if this error is potentially recoverable by retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_)
                | Self::Timeout { .. }
                | Self::RateLimited { .. }
                | Self::Api { status: 500..=599, .. }
        )
    }

    /// Returns a suggested retry delay in milliseconds, if applicable.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms } => Some(*retry_after_ms),
            Self::Timeout { .. } => Some(1_000),
            Self::Transport(_) => Some(2_000),
            _ => None,
        }
    }

    /// Create a not found error.
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an invalid data error.
    pub fn invalid_data(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                operation: err
                    .url()
                    .map(|u| u.path().to_string())
                    .unwrap_or_else(|| "request".to_string()),
                timeout_ms: 0,
            }
        } else if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
