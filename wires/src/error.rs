//! Backend call failures.
//!
//! Variants keep the failure kind for logging; every UI surface renders the
//! `Display` string as-is.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Error returned by any backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    /// The response body was not the JSON we expected.
    #[error("invalid response: {0}")]
    Decode(String),
    /// A required field was blank before the request was sent.
    #[error("missing required field `{0}`")]
    MissingField(String),
    /// Browser-only call invoked outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, preferring the backend's `error`/`detail`
    /// message from `body` over `fallback`.
    #[must_use]
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                ["error", "detail", "message"]
                    .iter()
                    .find_map(|key| value.get(*key).and_then(Value::as_str).map(ToOwned::to_owned))
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        Self::Status { status, message }
    }
}
