//! REST paths of the GeminiWire backend.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::fmt::Write as _;

use crate::execute::ExecuteRequest;

/// Backend base URL used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// URL builder rooted at the backend base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Blank input falls back to [`DEFAULT_API_BASE_URL`]; trailing slashes
    /// are dropped.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base: base.to_owned() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET`/`POST /wires/`
    #[must_use]
    pub fn wires(&self) -> String {
        format!("{}/wires/", self.base)
    }

    /// `PUT`/`DELETE /wires/{id}`
    #[must_use]
    pub fn wire(&self, wire_id: &str) -> String {
        format!("{}/wires/{}", self.base, encode_path_segment(wire_id))
    }

    #[must_use]
    pub fn wire_execute(&self) -> String {
        format!("{}/wires/execute", self.base)
    }

    /// `GET`/`POST /wireflows/`
    #[must_use]
    pub fn wireflows(&self) -> String {
        format!("{}/wireflows/", self.base)
    }

    /// `PUT`/`DELETE /wireflows/{id}`
    #[must_use]
    pub fn wireflow(&self, wireflow_id: &str) -> String {
        format!("{}/wireflows/{}", self.base, encode_path_segment(wireflow_id))
    }

    #[must_use]
    pub fn wireflow_execute(&self) -> String {
        format!("{}/wireflows/execute", self.base)
    }

    /// Execute endpoint matching the request kind.
    #[must_use]
    pub fn execute(&self, request: &ExecuteRequest) -> String {
        match request {
            ExecuteRequest::Wire { .. } => self.wire_execute(),
            ExecuteRequest::Wireflow { .. } => self.wireflow_execute(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for b in segment.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}
