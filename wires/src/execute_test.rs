use super::*;

fn inputs(pairs: &[(&str, &str)]) -> Inputs {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

// =============================================================
// validate_inputs
// =============================================================

#[test]
fn validate_inputs_accepts_all_filled() {
    let provided = inputs(&[("x", "hello"), ("y", "world")]);
    let validated = validate_inputs(["x", "y"], &provided).expect("valid");
    assert_eq!(validated, provided);
}

#[test]
fn validate_inputs_rejects_blank_values() {
    let provided = inputs(&[("x", "hello"), ("y", "   ")]);
    assert_eq!(
        validate_inputs(["x", "y"], &provided),
        Err(InputError::Missing(vec!["y".to_owned()]))
    );
}

#[test]
fn validate_inputs_reports_absent_values_in_declared_order() {
    let provided = inputs(&[]);
    let err = validate_inputs(["b", "a"], &provided).unwrap_err();
    assert_eq!(err, InputError::Missing(vec!["b".to_owned(), "a".to_owned()]));
    assert_eq!(err.to_string(), "please fill in: b, a");
}

#[test]
fn validate_inputs_rejects_unknown_names() {
    let provided = inputs(&[("x", "1"), ("typo", "2")]);
    assert_eq!(
        validate_inputs(["x"], &provided),
        Err(InputError::Unknown("typo".to_owned()))
    );
}

#[test]
fn validate_inputs_with_nothing_declared_is_empty() {
    assert_eq!(validate_inputs([], &Inputs::new()), Ok(Inputs::new()));
}

#[test]
fn validate_inputs_keeps_values_verbatim() {
    let provided = inputs(&[("x", "  padded  ")]);
    let validated = validate_inputs(["x"], &provided).expect("valid");
    assert_eq!(validated["x"], "  padded  ");
}

// =============================================================
// ExecuteRequest
// =============================================================

#[test]
fn wire_request_serializes_with_wire_id() {
    let req = ExecuteRequest::Wire { wire_id: "w1".to_owned(), inputs: inputs(&[("x", "1")]) };
    assert_eq!(
        serde_json::to_value(&req).expect("json"),
        serde_json::json!({ "wire_id": "w1", "inputs": { "x": "1" } })
    );
    assert_eq!(req.id(), "w1");
    assert_eq!(req.kind(), "wire");
}

#[test]
fn wireflow_request_serializes_with_wireflow_id() {
    let req = ExecuteRequest::Wireflow { wireflow_id: "f1".to_owned(), inputs: Inputs::new() };
    assert_eq!(
        serde_json::to_value(&req).expect("json"),
        serde_json::json!({ "wireflow_id": "f1", "inputs": {} })
    );
    assert_eq!(req.kind(), "wireflow");
    assert!(req.inputs().is_empty());
}

// =============================================================
// ExecuteResult
// =============================================================

#[test]
fn display_text_prefers_error() {
    let result: ExecuteResult =
        serde_json::from_str(r#"{"output":"ignored","error":"quota exceeded"}"#).expect("result");
    assert!(result.is_error());
    assert_eq!(result.display_text(), "quota exceeded");
}

#[test]
fn display_text_shows_string_output_verbatim() {
    let result: ExecuteResult = serde_json::from_str(r#"{"output":"line 1\nline 2"}"#).expect("result");
    assert!(!result.is_error());
    assert_eq!(result.display_text(), "line 1\nline 2");
}

#[test]
fn display_text_falls_back_to_final_output() {
    let result: ExecuteResult = serde_json::from_str(r#"{"final_output":"done"}"#).expect("result");
    assert_eq!(result.display_text(), "done");
}

#[test]
fn display_text_pretty_prints_structured_output() {
    let result: ExecuteResult = serde_json::from_str(r#"{"output":{"k":1}}"#).expect("result");
    assert_eq!(result.display_text(), "{\n  \"k\": 1\n}");
}

#[test]
fn display_text_without_output() {
    assert_eq!(ExecuteResult::default().display_text(), "(no output)");
}

#[test]
fn raw_json_keeps_unrecognized_fields() {
    let result: ExecuteResult =
        serde_json::from_str(r#"{"output":"x","steps":[{"wire_id":"a"}]}"#).expect("result");
    let raw: serde_json::Value = serde_json::from_str(&result.raw_json()).expect("raw");
    assert_eq!(raw["steps"][0]["wire_id"], "a");
    assert_eq!(raw["output"], "x");
    assert!(raw.get("error").is_none());
}
