use super::*;

fn flow(id: &str) -> Wireflow {
    Wireflow { wireflow_id: id.to_owned(), description: format!("{id} flow"), wires: Vec::new() }
}

fn loaded() -> WireflowsState {
    let mut state = WireflowsState::default();
    state.fetch_succeeded(vec![flow("f1"), flow("f2")], vec![Wire { wire_id: "w1".to_owned(), ..Wire::default() }]);
    state
}

#[test]
fn wireflows_state_starts_loading() {
    let state = WireflowsState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(state.wires.is_empty());
    assert_eq!(state.modal, WireflowsModal::Closed);
}

#[test]
fn fetch_succeeded_stores_both_lists() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.wires.len(), 1);
}

#[test]
fn fetch_failed_sets_error_and_dismiss_clears_it() {
    let mut state = loaded();
    state.begin_fetch();
    state.fetch_failed("Failed to fetch wireflows");
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    state.dismiss_error();
    assert!(state.error.is_none());
}

#[test]
fn open_edit_returns_wireflow_and_opens_builder() {
    let mut state = loaded();
    let found = state.open_edit("f2").expect("wireflow");
    assert_eq!(found.wireflow_id, "f2");
    assert_eq!(state.modal, WireflowsModal::Edit("f2".to_owned()));
}

#[test]
fn open_unknown_wireflow_keeps_modal_closed() {
    let mut state = loaded();
    assert!(state.open_edit("missing").is_none());
    assert!(state.open_execute("missing").is_none());
    assert_eq!(state.modal, WireflowsModal::Closed);
}

#[test]
fn delete_confirmation_flow() {
    let mut state = loaded();
    state.request_delete("f1");
    assert_eq!(state.pending_delete(), Some("f1"));
    assert_eq!(state.modal, WireflowsModal::ConfirmDelete("f1".to_owned()));

    state.delete_pending = true;
    state.delete_failed("Failed to delete wireflow");
    assert!(!state.delete_pending);
    assert_eq!(state.modal, WireflowsModal::Closed);
    assert_eq!(state.error.as_deref(), Some("Failed to delete wireflow"));
}

#[test]
fn close_modal_resets_pending_delete() {
    let mut state = loaded();
    state.open_create();
    assert_eq!(state.modal, WireflowsModal::Create);
    state.delete_pending = true;
    state.close_modal();
    assert_eq!(state.modal, WireflowsModal::Closed);
    assert!(!state.delete_pending);
}
