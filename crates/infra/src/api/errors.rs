//! API-specific error types
//!
//! Classifies failed calls by transport versus HTTP status, keeping the
//! backend-supplied message (when one exists) separate from the generic
//! description so callers can decide what to show the user.

use std::fmt;
use std::time::Duration;

use styleverse_domain::StyleVerseError;
use thiserror::Error;

/// Status code plus the backend's `message` field, when present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub status: u16,
    pub message: Option<String>,
}

impl StatusError {
    #[must_use]
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "status {}: {}", self.status, message),
            None => write!(f, "status {}", self.status),
        }
    }
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed: {0}")]
    Auth(StatusError),

    #[error("client error: {0}")]
    Client(StatusError),

    #[error("server error: {0}")]
    Server(StatusError),

    #[error("network error: {0}")]
    Network(String),

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of the failed call, when one was received
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth(err) | Self::Client(err) | Self::Server(err) => Some(err.status),
            _ => None,
        }
    }

    /// Backend-supplied message, when the error body carried one
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Auth(err) | Self::Client(err) | Self::Server(err) => err.message.as_deref(),
            _ => None,
        }
    }

    /// Whether the call was rejected with HTTP 401 specifically
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Convert transport-layer errors into API errors
impl From<StyleVerseError> for ApiError {
    fn from(err: StyleVerseError) -> Self {
        match err {
            StyleVerseError::Network(message) => Self::Network(message),
            StyleVerseError::Auth(message) => {
                Self::Auth(StatusError::new(401, Some(message)))
            }
            StyleVerseError::Config(message) => Self::Config(message),
            StyleVerseError::Storage(message) => Self::Storage(message),
            StyleVerseError::NotFound(message) | StyleVerseError::InvalidInput(message) => {
                Self::Client(StatusError::new(400, Some(message)))
            }
            StyleVerseError::Internal(message) => Self::Network(message),
        }
    }
}

/// Convert API errors back into the domain error for embedder boundaries
impl From<ApiError> for StyleVerseError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(status) => Self::Auth(status.to_string()),
            ApiError::Client(status) if status.status == 404 => Self::NotFound(status.to_string()),
            ApiError::Client(status) => Self::InvalidInput(status.to_string()),
            ApiError::Server(status) => Self::Network(status.to_string()),
            ApiError::Network(message) => Self::Network(message),
            ApiError::Timeout(timeout) => Self::Network(format!("timeout after {timeout:?}")),
            ApiError::Decode(message) => Self::Internal(message),
            ApiError::Storage(message) => Self::Storage(message),
            ApiError::Config(message) => Self::Config(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_helpers_expose_the_received_code() {
        let err = ApiError::Auth(StatusError::new(401, None));
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());

        let err = ApiError::Auth(StatusError::new(403, None));
        assert!(!err.is_unauthorized());

        assert_eq!(ApiError::Network("down".to_string()).status(), None);
    }

    #[test]
    fn server_message_only_reports_backend_text() {
        let err = ApiError::Client(StatusError::new(400, Some("Invalid payload".to_string())));
        assert_eq!(err.server_message(), Some("Invalid payload"));

        let err = ApiError::Client(StatusError::new(400, None));
        assert_eq!(err.server_message(), None);

        let err = ApiError::Network("down".to_string());
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn status_error_display_includes_message_when_present() {
        let err = StatusError::new(500, Some("boom".to_string()));
        assert_eq!(err.to_string(), "status 500: boom");

        let err = StatusError::new(500, None);
        assert_eq!(err.to_string(), "status 500");
    }
}
