//! Wire-list state for the wires page.
//!
//! DESIGN
//! ======
//! The list, its loading/error flags, and which dialog is open live here.
//! Form drafts and execution inputs are held in their own signals so typing
//! in a dialog does not re-render the table.

#[cfg(test)]
#[path = "wires_test.rs"]
mod wires_test;

use wires::{Wire, find_wire};

/// Dialog currently shown on the wires page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WiresModal {
    #[default]
    Closed,
    Create,
    Edit(String),
    Detail(String),
    Execute(String),
    ConfirmDelete(String),
}

/// Wires page state.
#[derive(Clone, Debug)]
pub struct WiresState {
    pub items: Vec<Wire>,
    pub loading: bool,
    pub error: Option<String>,
    pub modal: WiresModal,
    pub delete_pending: bool,
}

impl Default for WiresState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, modal: WiresModal::Closed, delete_pending: false }
    }
}

impl WiresState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fetch_succeeded(&mut self, items: Vec<Wire>) {
        self.items = items;
        self.loading = false;
    }

    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn open_create(&mut self) {
        self.modal = WiresModal::Create;
    }

    /// Open the edit form for `wire_id`; returns the wire to seed the draft.
    pub fn open_edit(&mut self, wire_id: &str) -> Option<Wire> {
        let wire = find_wire(&self.items, wire_id)?.clone();
        self.modal = WiresModal::Edit(wire.wire_id.clone());
        Some(wire)
    }

    /// Open the execute dialog for `wire_id`; returns the wire to build the form.
    pub fn open_execute(&mut self, wire_id: &str) -> Option<Wire> {
        let wire = find_wire(&self.items, wire_id)?.clone();
        self.modal = WiresModal::Execute(wire.wire_id.clone());
        Some(wire)
    }

    /// Returns `false` when `wire_id` is not in the list.
    pub fn open_detail(&mut self, wire_id: &str) -> bool {
        if find_wire(&self.items, wire_id).is_none() {
            return false;
        }
        self.modal = WiresModal::Detail(wire_id.to_owned());
        true
    }

    pub fn request_delete(&mut self, wire_id: &str) {
        self.modal = WiresModal::ConfirmDelete(wire_id.to_owned());
    }

    pub fn close_modal(&mut self) {
        self.modal = WiresModal::Closed;
        self.delete_pending = false;
    }

    /// Wire shown by the detail dialog, if that dialog is open.
    #[must_use]
    pub fn detail_wire(&self) -> Option<&Wire> {
        match &self.modal {
            WiresModal::Detail(id) => find_wire(&self.items, id),
            _ => None,
        }
    }

    /// Id awaiting delete confirmation, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        match &self.modal {
            WiresModal::ConfirmDelete(id) => Some(id),
            _ => None,
        }
    }

    pub fn delete_failed(&mut self, message: impl Into<String>) {
        self.delete_pending = false;
        self.modal = WiresModal::Closed;
        self.error = Some(message.into());
    }
}
