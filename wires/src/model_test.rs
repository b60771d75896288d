use super::*;

fn wire(id: &str, inputs: &[&str], output_key: &str) -> Wire {
    Wire {
        wire_id: id.to_owned(),
        description: format!("{id} description"),
        prompt: inputs.iter().map(|i| format!("{{{i}}}")).collect::<Vec<_>>().join(" "),
        inputs: inputs.iter().map(|i| ((*i).to_owned(), String::new())).collect(),
        output_key: output_key.to_owned(),
    }
}

fn step(id: &str, inputs: &[(&str, &str)], output_key: &str) -> WireflowStep {
    WireflowStep {
        wire_id: id.to_owned(),
        inputs: inputs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
        output_key: output_key.to_owned(),
    }
}

#[test]
fn wire_decodes_scenario_payload() {
    let raw = r#"{"wire_id":"w1","description":"d","prompt":"{x}","inputs":{"x":""},"output_key":"out"}"#;
    let parsed: Wire = serde_json::from_str(raw).expect("wire");
    assert_eq!(parsed.wire_id, "w1");
    assert_eq!(parsed.inputs.get("x").map(String::as_str), Some(""));
    assert_eq!(parsed.output_key, "out");
}

#[test]
fn wire_decode_tolerates_missing_optional_fields_and_extras() {
    let raw = r#"{"wire_id":"w2","created_at":"2024-01-01"}"#;
    let parsed: Wire = serde_json::from_str(raw).expect("wire");
    assert_eq!(parsed.wire_id, "w2");
    assert!(parsed.description.is_empty());
    assert!(parsed.inputs.is_empty());
}

#[test]
fn wire_serializes_inputs_as_object() {
    let json = serde_json::to_value(wire("w1", &["x"], "out")).expect("json");
    assert_eq!(json["inputs"], serde_json::json!({ "x": "" }));
}

#[test]
fn undeclared_placeholders_lists_prompt_only_names() {
    let mut w = wire("w1", &["x"], "out");
    w.prompt = "{x} then {y}".to_owned();
    assert_eq!(w.undeclared_placeholders(), vec!["y".to_owned()]);
}

#[test]
fn step_from_wire_blanks_every_input() {
    let mut w = wire("w1", &["a", "b"], "out");
    w.inputs.insert("a".to_owned(), "hint text".to_owned());
    let s = WireflowStep::from_wire(&w);
    assert_eq!(s.wire_id, "w1");
    assert_eq!(s.output_key, "out");
    assert!(s.inputs.values().all(String::is_empty));
    assert_eq!(s.inputs.len(), 2);
}

#[test]
fn links_connect_inputs_to_earlier_outputs() {
    let flow = Wireflow {
        wireflow_id: "f".to_owned(),
        description: String::new(),
        wires: vec![
            step("summarize", &[("text", "")], "summary"),
            step("translate", &[("text", "{summary}"), ("lang", "fr")], "translated"),
        ],
    };
    assert_eq!(
        flow.links(),
        vec![StepLink { step: 1, input: "text".to_owned(), source: 0 }]
    );
}

#[test]
fn links_ignore_later_and_unknown_producers() {
    let flow = Wireflow {
        wireflow_id: "f".to_owned(),
        description: String::new(),
        wires: vec![
            step("a", &[("x", "{later}")], "first"),
            step("b", &[("y", "{missing}")], "later"),
        ],
    };
    assert!(flow.links().is_empty());
}

#[test]
fn links_prefer_nearest_producer() {
    let flow = Wireflow {
        wireflow_id: "f".to_owned(),
        description: String::new(),
        wires: vec![
            step("a", &[], "out"),
            step("b", &[], "out"),
            step("c", &[("x", "{out}")], "final"),
        ],
    };
    assert_eq!(flow.links()[0].source, 1);
}

#[test]
fn required_inputs_skip_filled_and_linked_values() {
    let flow = Wireflow {
        wireflow_id: "f".to_owned(),
        description: String::new(),
        wires: vec![
            step("summarize", &[("text", " ")], "summary"),
            step("translate", &[("lang", ""), ("text", "{summary}")], "translated"),
            step("again", &[("lang", "")], "done"),
        ],
    };
    assert_eq!(flow.required_inputs(), vec!["text".to_owned(), "lang".to_owned()]);
}

#[test]
fn find_helpers_match_by_id() {
    let wires = vec![wire("a", &[], "o"), wire("b", &[], "o")];
    assert_eq!(find_wire(&wires, "b").map(|w| w.wire_id.as_str()), Some("b"));
    assert!(find_wire(&wires, "c").is_none());

    let flows = vec![Wireflow { wireflow_id: "f1".to_owned(), ..Wireflow::default() }];
    assert!(find_wireflow(&flows, "f1").is_some());
    assert!(find_wireflow(&flows, "f2").is_none());
}
