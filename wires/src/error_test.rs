use super::*;

#[test]
fn from_status_prefers_backend_error_field() {
    let err = ApiError::from_status(400, r#"{"error":"prompt too long"}"#, "Failed to save wire");
    assert_eq!(err.to_string(), "prompt too long (HTTP 400)");
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
}

#[test]
fn from_status_reads_detail_field() {
    let err = ApiError::from_status(404, r#"{"detail":"Wire not found"}"#, "Failed to delete wire");
    assert_eq!(err.to_string(), "Wire not found (HTTP 404)");
}

#[test]
fn from_status_falls_back_on_non_json_body() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>", "Failed to fetch wires");
    assert_eq!(err.to_string(), "Failed to fetch wires (HTTP 502)");
}

#[test]
fn from_status_falls_back_on_blank_message() {
    let err = ApiError::from_status(500, r#"{"error":"  "}"#, "Failed to execute wire");
    assert_eq!(err.to_string(), "Failed to execute wire (HTTP 500)");
}

#[test]
fn other_variants_display() {
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
    assert_eq!(
        ApiError::MissingField("wire_id".to_owned()).to_string(),
        "missing required field `wire_id`"
    );
}
