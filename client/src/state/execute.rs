//! Execute-dialog state shared by wires and wireflows.
//!
//! One text field per input; submission is refused locally while any field
//! is blank, so no request is sent for an incomplete form.

#[cfg(test)]
#[path = "execute_test.rs"]
mod execute_test;

use wires::{ExecuteRequest, ExecuteResult, InputError, Inputs, Wire, Wireflow, validate_inputs};

/// What the dialog runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecuteTarget {
    Wire(String),
    Wireflow(String),
}

/// One input row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecuteField {
    pub name: String,
    /// Help text shown as the input placeholder.
    pub hint: String,
    pub value: String,
}

/// Execute dialog contents and request lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecuteForm {
    pub target: ExecuteTarget,
    pub fields: Vec<ExecuteField>,
    pub pending: bool,
    pub result: Option<ExecuteResult>,
    pub error: Option<String>,
    pub show_json: bool,
}

impl ExecuteForm {
    #[must_use]
    pub fn for_wire(wire: &Wire) -> Self {
        let fields = wire
            .inputs
            .iter()
            .map(|(name, hint)| ExecuteField { name: name.clone(), hint: hint.clone(), value: String::new() })
            .collect();
        Self::new(ExecuteTarget::Wire(wire.wire_id.clone()), fields)
    }

    /// Fields come from the inputs left blank in the wireflow's steps.
    #[must_use]
    pub fn for_wireflow(wireflow: &Wireflow) -> Self {
        let fields = wireflow
            .required_inputs()
            .into_iter()
            .map(|name| ExecuteField { name, hint: String::new(), value: String::new() })
            .collect();
        Self::new(ExecuteTarget::Wireflow(wireflow.wireflow_id.clone()), fields)
    }

    fn new(target: ExecuteTarget, fields: Vec<ExecuteField>) -> Self {
        Self { target, fields, pending: false, result: None, error: None, show_json: false }
    }

    /// Dialog heading, e.g. `Execute Wire: summarize`.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.target {
            ExecuteTarget::Wire(id) => format!("Execute Wire: {id}"),
            ExecuteTarget::Wireflow(id) => format!("Execute Wireflow: {id}"),
        }
    }

    pub fn set_value(&mut self, name: &str, value: String) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value;
        }
    }

    #[must_use]
    pub fn values(&self) -> Inputs {
        self.fields.iter().map(|f| (f.name.clone(), f.value.clone())).collect()
    }

    /// Build the request after the strict blank-field check.
    ///
    /// # Errors
    ///
    /// [`InputError::Missing`] naming every blank field.
    pub fn request(&self) -> Result<ExecuteRequest, InputError> {
        let inputs = validate_inputs(self.fields.iter().map(|f| f.name.as_str()), &self.values())?;
        Ok(match &self.target {
            ExecuteTarget::Wire(id) => ExecuteRequest::Wire { wire_id: id.clone(), inputs },
            ExecuteTarget::Wireflow(id) => ExecuteRequest::Wireflow { wireflow_id: id.clone(), inputs },
        })
    }

    /// Validate and mark pending. `None` means nothing should be sent:
    /// either a request is already in flight or validation failed (the
    /// message is stored in `error`).
    pub fn submit(&mut self) -> Option<ExecuteRequest> {
        if self.pending {
            return None;
        }
        match self.request() {
            Ok(request) => {
                self.begin();
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn begin(&mut self) {
        self.pending = true;
        self.error = None;
    }

    pub fn succeeded(&mut self, result: ExecuteResult) {
        self.pending = false;
        self.result = Some(result);
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.error = Some(message.into());
    }

    pub fn toggle_json(&mut self) {
        self.show_json = !self.show_json;
    }

    /// Return to the input form, keeping the typed values.
    pub fn run_again(&mut self) {
        self.result = None;
        self.error = None;
        self.show_json = false;
    }
}
