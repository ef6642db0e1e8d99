//! # Response Envelopes
//!
//! Every endpoint of the content API wraps its payload in the same
//! `{success, data, message, errors}` envelope. List endpoints nest a second
//! pagination envelope inside `data`.

use serde::{Deserialize, Serialize};

/// Standard envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
    /// Field-level error details on rejected requests, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    /// Build a success envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: String::new(),
            errors: None,
        }
    }

    /// Build a success envelope with a human-readable message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            errors: None,
        }
    }
}

impl ApiResponse<()> {
    /// Build a failure envelope. `data` serializes as JSON `null`.
    pub fn error(message: impl Into<String>, errors: Option<serde_json::Value>) -> Self {
        Self {
            success: false,
            data: (),
            message: message.into(),
            errors,
        }
    }
}

/// Pagination envelope nested inside `ApiResponse` for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    /// Whether a page after `current_page` exists.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Best-effort parse target for non-2xx JSON bodies.
///
/// Every field is defaulted so that partial or foreign error shapes still
/// decode instead of masking the original HTTP failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}
