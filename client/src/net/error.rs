//! Error taxonomy for auth API calls.
//!
//! Every operation has its own variant so callers can tell which step of a
//! composed flow failed; the [`FailureCause`] says why.

use super::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum FailureCause {
    /// Non-success status with a JSON error payload (field errors, `detail`).
    #[error("HTTP {status}: {payload}")]
    Body {
        status: u16,
        payload: serde_json::Value,
    },
    /// Non-success status whose body was empty or not JSON.
    #[error("HTTP {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("invalid JSON: {0}")]
    Json(String),
}

impl FailureCause {
    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Body { status, .. } | Self::Status(status) => Some(*status),
            Self::Transport(_) | Self::Json(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("registration failed: {0}")]
    Registration(FailureCause),
    #[error("login failed: {0}")]
    Login(FailureCause),
    #[error("failed to get user profile: {0}")]
    ProfileFetch(FailureCause),
    #[error("failed to get detailed user profile: {0}")]
    DetailedProfileFetch(FailureCause),
}

impl AuthError {
    #[must_use]
    pub fn cause(&self) -> &FailureCause {
        match self {
            Self::Registration(cause)
            | Self::Login(cause)
            | Self::ProfileFetch(cause)
            | Self::DetailedProfileFetch(cause) => cause,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.cause().status()
    }
}
