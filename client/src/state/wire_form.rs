//! Draft state for the create/edit wire form.
//!
//! Inputs are kept as an ordered list while editing so rows keep their
//! position as names change; [`WireDraft::to_wire`] folds them into the
//! object the backend expects.

#[cfg(test)]
#[path = "wire_form_test.rs"]
mod wire_form_test;

use wires::placeholder::is_valid_name;
use wires::{Wire, prompt_placeholders};

/// Why a draft cannot be submitted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("input names must not be blank")]
    BlankInputName,
    /// Only letters, digits and `_` can appear inside a `{placeholder}`.
    #[error("input name `{0}` may only use letters, digits and _")]
    InvalidInputName(String),
    #[error("duplicate input name `{0}`")]
    DuplicateInput(String),
}

/// One declared input row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputField {
    pub name: String,
    pub placeholder: String,
}

/// Wire form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WireDraft {
    pub wire_id: String,
    pub description: String,
    pub prompt: String,
    pub inputs: Vec<InputField>,
    pub output_key: String,
    editing: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl WireDraft {
    /// Empty draft for a new wire.
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Draft seeded from an existing wire; `wire_id` is locked.
    #[must_use]
    pub fn edit(wire: &Wire) -> Self {
        Self {
            wire_id: wire.wire_id.clone(),
            description: wire.description.clone(),
            prompt: wire.prompt.clone(),
            inputs: wire
                .inputs
                .iter()
                .map(|(name, placeholder)| InputField { name: name.clone(), placeholder: placeholder.clone() })
                .collect(),
            output_key: wire.output_key.clone(),
            editing: true,
            saving: false,
            error: None,
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.editing
    }

    /// No-op in edit mode.
    pub fn set_wire_id(&mut self, value: String) {
        if !self.editing {
            self.wire_id = value;
        }
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
    }

    pub fn set_prompt(&mut self, value: String) {
        self.prompt = value;
    }

    pub fn set_output_key(&mut self, value: String) {
        self.output_key = value;
    }

    /// Append `input_N`, N starting at `len + 1` and bumped past taken names.
    pub fn add_input(&mut self) {
        let mut n = self.inputs.len() + 1;
        while self.has_input(&format!("input_{n}")) {
            n += 1;
        }
        self.inputs.push(InputField { name: format!("input_{n}"), placeholder: String::new() });
    }

    pub fn rename_input(&mut self, index: usize, name: String) {
        if let Some(field) = self.inputs.get_mut(index) {
            field.name = name;
        }
    }

    pub fn set_input_placeholder(&mut self, index: usize, placeholder: String) {
        if let Some(field) = self.inputs.get_mut(index) {
            field.placeholder = placeholder;
        }
    }

    pub fn remove_input(&mut self, index: usize) {
        if index < self.inputs.len() {
            self.inputs.remove(index);
        }
    }

    /// Declare every prompt placeholder that has no input row yet.
    /// Returns how many rows were added.
    pub fn sync_inputs_from_prompt(&mut self) -> usize {
        let missing: Vec<String> = prompt_placeholders(&self.prompt)
            .into_iter()
            .filter(|name| !self.has_input(name))
            .collect();
        let added = missing.len();
        self.inputs
            .extend(missing.into_iter().map(|name| InputField { name, placeholder: String::new() }));
        added
    }

    /// Validate required fields and build the wire to submit.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] found, checking fields top to bottom.
    pub fn to_wire(&self) -> Result<Wire, DraftError> {
        let wire_id = required(&self.wire_id, "Wire ID")?;
        let description = required(&self.description, "Description")?;
        if self.prompt.trim().is_empty() {
            return Err(DraftError::Required("Prompt"));
        }

        let mut inputs = std::collections::BTreeMap::new();
        for field in &self.inputs {
            let name = field.name.trim();
            if name.is_empty() {
                return Err(DraftError::BlankInputName);
            }
            if !is_valid_name(name) {
                return Err(DraftError::InvalidInputName(name.to_owned()));
            }
            if inputs.insert(name.to_owned(), field.placeholder.clone()).is_some() {
                return Err(DraftError::DuplicateInput(name.to_owned()));
            }
        }

        let output_key = required(&self.output_key, "Output Key")?;
        Ok(Wire { wire_id, description, prompt: self.prompt.clone(), inputs, output_key })
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.error = None;
    }

    /// Keep every field as typed and show `message`.
    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.error = Some(message.into());
    }

    fn has_input(&self, name: &str) -> bool {
        self.inputs.iter().any(|f| f.name == name)
    }
}

fn required(value: &str, label: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::Required(label))
    } else {
        Ok(trimmed.to_owned())
    }
}
