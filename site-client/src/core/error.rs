//! # Client Error Types
//!
//! Consolidated error handling for the data-access layer.
//!
//! The taxonomy keeps failure classes distinguishable because callers react
//! to them differently: a [`ApiError::Validation`] is fixed by correcting a
//! field, a [`ApiError::Http`] surfaces the server's own message, and a
//! [`ApiError::Network`] means nothing reached the server at all. Nothing in
//! this layer retries automatically and no error is process-fatal.

use thiserror::Error;

/// Error type for every fallible operation in the client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Client-side pre-flight failure. No HTTP request was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The server answered with a non-2xx status and (when available) a JSON
    /// error body. `message`/`errors` are surfaced verbatim from that body.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        errors: Option<serde_json::Value>,
    },

    /// No response was received: offline, DNS failure, refused connection,
    /// or timeout. Distinct from [`ApiError::Http`] so the UI can suggest
    /// "check your connection" instead of "fix this field".
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered HTTP 401. The stored token has already been
    /// cleared by the time this surfaces.
    #[error("Authentication expired")]
    AuthExpired,

    /// A 2xx body that failed to parse as the expected envelope.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::AuthExpired => Some(401),
            _ => None,
        }
    }

    /// Whether this failure happened before any request left the client.
    pub fn is_preflight(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ApiError::Http {
            status: 404,
            message: "Project not found".to_string(),
            errors: None,
        };
        assert_eq!(err.to_string(), "HTTP 404: Project not found");
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(ApiError::AuthExpired.to_string(), "Authentication expired");
    }

    #[test]
    fn test_status_extraction() {
        let err = ApiError::Http {
            status: 422,
            message: "invalid".to_string(),
            errors: None,
        };
        assert_eq!(err.status(), Some(422));
        assert_eq!(ApiError::AuthExpired.status(), Some(401));
        assert_eq!(ApiError::Network("down".to_string()).status(), None);
    }

    #[test]
    fn test_preflight_classification() {
        assert!(ApiError::Validation("email".to_string()).is_preflight());
        assert!(!ApiError::Network("down".to_string()).is_preflight());
    }
}
