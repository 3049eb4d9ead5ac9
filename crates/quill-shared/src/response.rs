//! The API error body (RFC 7807 problem details).

use serde::{Deserialize, Serialize};

/// Problem-details body every non-form error answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    fn problem(status: u16, title: &str, detail: Option<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.to_string(),
            status,
            detail,
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::problem(400, "Bad Request", Some(detail.into()))
    }

    pub fn unauthorized() -> Self {
        Self::problem(401, "Unauthorized", None)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::problem(404, "Not Found", Some(detail.into()))
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::problem(409, "Conflict", Some(detail.into()))
    }

    /// Internal failures answer with the bare status; the detail stays in
    /// the server log.
    pub fn internal_error() -> Self {
        Self::problem(500, "Internal Server Error", None)
    }
}
