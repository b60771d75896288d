use super::*;

fn filled() -> WireDraft {
    let mut draft = WireDraft::create();
    draft.set_wire_id("w1".to_owned());
    draft.set_description("d".to_owned());
    draft.set_prompt("{x}".to_owned());
    draft.add_input();
    draft.rename_input(0, "x".to_owned());
    draft.set_output_key("out".to_owned());
    draft
}

#[test]
fn create_draft_is_blank_and_editable() {
    let draft = WireDraft::create();
    assert!(!draft.is_edit());
    assert!(draft.wire_id.is_empty());
    assert!(draft.inputs.is_empty());
}

#[test]
fn to_wire_builds_scenario_payload() {
    let wire = filled().to_wire().expect("wire");
    assert_eq!(
        serde_json::to_value(&wire).expect("json"),
        serde_json::json!({
            "wire_id": "w1",
            "description": "d",
            "prompt": "{x}",
            "inputs": { "x": "" },
            "output_key": "out"
        })
    );
}

#[test]
fn edit_locks_wire_id() {
    let original = filled().to_wire().expect("wire");
    let mut draft = WireDraft::edit(&original);
    assert!(draft.is_edit());
    draft.set_wire_id("renamed".to_owned());
    draft.set_description("new description".to_owned());
    let updated = draft.to_wire().expect("wire");
    assert_eq!(updated.wire_id, "w1");
    assert_eq!(updated.description, "new description");
    assert_eq!(updated.prompt, original.prompt);
    assert_eq!(updated.inputs, original.inputs);
    assert_eq!(updated.output_key, original.output_key);
}

#[test]
fn add_input_numbers_from_length_and_skips_taken_names() {
    let mut draft = WireDraft::create();
    draft.add_input();
    draft.add_input();
    assert_eq!(draft.inputs[0].name, "input_1");
    assert_eq!(draft.inputs[1].name, "input_2");

    draft.remove_input(0);
    draft.add_input();
    assert_eq!(draft.inputs[1].name, "input_3");
}

#[test]
fn rename_and_placeholder_ignore_out_of_range() {
    let mut draft = WireDraft::create();
    draft.rename_input(3, "x".to_owned());
    draft.set_input_placeholder(3, "hint".to_owned());
    draft.remove_input(3);
    assert!(draft.inputs.is_empty());
}

#[test]
fn to_wire_requires_fields_in_form_order() {
    let mut draft = filled();
    draft.set_description("  ".to_owned());
    assert_eq!(draft.to_wire(), Err(DraftError::Required("Description")));

    let mut draft = filled();
    draft.set_output_key(String::new());
    assert_eq!(draft.to_wire(), Err(DraftError::Required("Output Key")));
    assert_eq!(DraftError::Required("Output Key").to_string(), "Output Key is required");

    let mut draft = WireDraft::create();
    draft.set_description("d".to_owned());
    assert_eq!(draft.to_wire(), Err(DraftError::Required("Wire ID")));
}

#[test]
fn to_wire_rejects_blank_and_duplicate_input_names() {
    let mut draft = filled();
    draft.add_input();
    draft.rename_input(1, " ".to_owned());
    assert_eq!(draft.to_wire(), Err(DraftError::BlankInputName));

    draft.rename_input(1, "x".to_owned());
    assert_eq!(draft.to_wire(), Err(DraftError::DuplicateInput("x".to_owned())));
}

#[test]
fn to_wire_rejects_input_names_no_placeholder_can_match() {
    let mut draft = filled();
    draft.rename_input(0, "user name".to_owned());
    assert_eq!(draft.to_wire(), Err(DraftError::InvalidInputName("user name".to_owned())));

    draft.rename_input(0, " user_name2 ".to_owned());
    let wire = draft.to_wire().expect("valid name");
    assert!(wire.inputs.contains_key("user_name2"));
}

#[test]
fn to_wire_trims_identifiers_but_keeps_prompt() {
    let mut draft = filled();
    draft.set_wire_id("  w1  ".to_owned());
    draft.set_prompt("  {x}\n".to_owned());
    let wire = draft.to_wire().expect("wire");
    assert_eq!(wire.wire_id, "w1");
    assert_eq!(wire.prompt, "  {x}\n");
}

#[test]
fn sync_inputs_from_prompt_adds_only_missing() {
    let mut draft = filled();
    draft.set_prompt("{x} and {y} and {z}".to_owned());
    assert_eq!(draft.sync_inputs_from_prompt(), 2);
    let names: Vec<&str> = draft.inputs.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["x", "y", "z"]);
    assert_eq!(draft.sync_inputs_from_prompt(), 0);
}

#[test]
fn save_failure_preserves_fields() {
    let mut draft = filled();
    draft.begin_save();
    assert!(draft.saving);
    draft.save_failed("Failed to save wire. Please try again.");
    assert!(!draft.saving);
    assert_eq!(draft.error.as_deref(), Some("Failed to save wire. Please try again."));
    assert_eq!(draft.wire_id, "w1");
    assert_eq!(draft.inputs.len(), 1);
}
