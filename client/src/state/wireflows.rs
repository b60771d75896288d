//! Wireflow-list state for the wireflows page.
//!
//! The page needs both collections: wireflows for the table and wires for
//! the builder's available list.

#[cfg(test)]
#[path = "wireflows_test.rs"]
mod wireflows_test;

use wires::{Wire, Wireflow, find_wireflow};

/// Dialog currently shown on the wireflows page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WireflowsModal {
    #[default]
    Closed,
    Create,
    Edit(String),
    Execute(String),
    ConfirmDelete(String),
}

/// Wireflows page state.
#[derive(Clone, Debug)]
pub struct WireflowsState {
    pub items: Vec<Wireflow>,
    pub wires: Vec<Wire>,
    pub loading: bool,
    pub error: Option<String>,
    pub modal: WireflowsModal,
    pub delete_pending: bool,
}

impl Default for WireflowsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            wires: Vec::new(),
            loading: true,
            error: None,
            modal: WireflowsModal::Closed,
            delete_pending: false,
        }
    }
}

impl WireflowsState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fetch_succeeded(&mut self, items: Vec<Wireflow>, wires: Vec<Wire>) {
        self.items = items;
        self.wires = wires;
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
        self.modal = WireflowsModal::Create;
    }

    /// Open the builder on `wireflow_id`; returns the wireflow to seed it.
    pub fn open_edit(&mut self, wireflow_id: &str) -> Option<Wireflow> {
        let wireflow = find_wireflow(&self.items, wireflow_id)?.clone();
        self.modal = WireflowsModal::Edit(wireflow.wireflow_id.clone());
        Some(wireflow)
    }

    pub fn open_execute(&mut self, wireflow_id: &str) -> Option<Wireflow> {
        let wireflow = find_wireflow(&self.items, wireflow_id)?.clone();
        self.modal = WireflowsModal::Execute(wireflow.wireflow_id.clone());
        Some(wireflow)
    }

    pub fn request_delete(&mut self, wireflow_id: &str) {
        self.modal = WireflowsModal::ConfirmDelete(wireflow_id.to_owned());
    }

    pub fn close_modal(&mut self) {
        self.modal = WireflowsModal::Closed;
        self.delete_pending = false;
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        match &self.modal {
            WireflowsModal::ConfirmDelete(id) => Some(id),
            _ => None,
        }
    }

    pub fn delete_failed(&mut self, message: impl Into<String>) {
        self.delete_pending = false;
        self.modal = WireflowsModal::Closed;
        self.error = Some(message.into());
    }
}
