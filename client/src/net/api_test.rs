use super::*;

#[test]
fn failure_messages_name_the_resource() {
    assert_eq!(fetch_failed_message("wire"), "Failed to fetch wires");
    assert_eq!(fetch_failed_message("wireflow"), "Failed to fetch wireflows");
    assert_eq!(save_failed_message("wire"), "Failed to save wire");
    assert_eq!(delete_failed_message("wireflow"), "Failed to delete wireflow");
}

#[test]
fn execute_failed_message_follows_request_kind() {
    let wire = ExecuteRequest::Wire { wire_id: "w".to_owned(), inputs: wires::Inputs::new() };
    let flow = ExecuteRequest::Wireflow { wireflow_id: "f".to_owned(), inputs: wires::Inputs::new() };
    assert_eq!(execute_failed_message(&wire), "Failed to execute wire");
    assert_eq!(execute_failed_message(&flow), "Failed to execute wireflow");
}

#[test]
fn decode_body_reads_wire_list() {
    let body = r#"[{"wire_id":"w1","description":"d","prompt":"{x}","inputs":{"x":""},"output_key":"out"}]"#;
    let wires: Vec<Wire> = decode_body(body).expect("wires");
    assert_eq!(wires.len(), 1);
    assert_eq!(wires[0].wire_id, "w1");
}

#[test]
fn decode_body_reports_malformed_json() {
    let err = decode_body::<Vec<Wire>>("<html>").expect_err("decode error");
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(err.to_string().starts_with("invalid response:"));
}

#[test]
fn decode_body_reads_execute_result_with_extras() {
    let result: ExecuteResult = decode_body(r#"{"final_output":"done","steps":3}"#).expect("result");
    assert_eq!(result.display_text(), "done");
    assert!(result.raw_json().contains("\"steps\": 3"));
}

#[test]
fn unreadable_success_body_is_transport_error() {
    let err = response_body(true, 200, Err::<String, _>("body stream aborted"), "Failed to fetch wires")
        .expect_err("transport error");
    assert_eq!(err, ApiError::Transport("body stream aborted".to_owned()));
}

#[test]
fn error_status_uses_body_or_fallback() {
    let err = response_body::<&str>(false, 400, Ok(r#"{"detail":"Wire already exists"}"#.to_owned()), "Failed to save wire")
        .expect_err("status error");
    assert_eq!(err, ApiError::Status { status: 400, message: "Wire already exists".to_owned() });

    let err = response_body(false, 500, Err::<String, _>("reset"), "Failed to save wire").expect_err("status error");
    assert_eq!(err, ApiError::Status { status: 500, message: "Failed to save wire".to_owned() });
}

#[test]
fn success_body_passes_through() {
    assert_eq!(response_body::<&str>(true, 200, Ok("[]".to_owned()), "unused"), Ok("[]".to_owned()));
}

#[test]
fn blank_id_is_missing_field() {
    assert_eq!(require_id("wire_id", "  "), Err(ApiError::MissingField("wire_id".to_owned())));
    assert_eq!(require_id("wireflow_id", "f1"), Ok("f1"));
}
