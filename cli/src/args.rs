//! Turning command-line values into wires, wireflows, and input maps.

#[cfg(test)]
#[path = "args_test.rs"]
mod args_test;

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use wires::placeholder::is_valid_name;
use wires::{ApiError, Inputs, Wire, Wireflow};

use crate::CliError;

/// Parse `name=value`. Only the first `=` splits; the value may be empty.
pub fn parse_key_value(raw: &str) -> Result<(String, String), CliError> {
    let (key, value) = raw.split_once('=').ok_or_else(|| CliError::InvalidKeyValue(raw.to_owned()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidKeyValue(raw.to_owned()));
    }
    Ok((key.to_owned(), value.to_owned()))
}

pub fn collect_inputs(pairs: Vec<(String, String)>) -> Inputs {
    pairs.into_iter().collect()
}

/// Wire fields as given on the command line. `None` means "not supplied".
#[derive(Debug, Default, Clone)]
pub struct WireFields {
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub inputs: Option<Vec<(String, String)>>,
    pub output_key: Option<String>,
}

impl WireFields {
    /// Build a new wire. Every field but the inputs is required, matching
    /// the web form.
    pub fn into_wire(self, wire_id: &str) -> Result<Wire, CliError> {
        let wire = Wire {
            wire_id: required("wire_id", Some(wire_id.to_owned()))?,
            description: required("description", self.description)?,
            prompt: required("prompt", self.prompt)?,
            inputs: declared_inputs(self.inputs.unwrap_or_default())?,
            output_key: required("output_key", self.output_key)?,
        };
        warn_undeclared(&wire);
        Ok(wire)
    }

    /// Overwrite only the supplied fields. The id never changes.
    pub fn apply_to(self, wire: &mut Wire) -> Result<(), CliError> {
        if let Some(description) = self.description {
            wire.description = required("description", Some(description))?;
        }
        if let Some(prompt) = self.prompt {
            wire.prompt = required("prompt", Some(prompt))?;
        }
        if let Some(inputs) = self.inputs {
            wire.inputs = declared_inputs(inputs)?;
        }
        if let Some(output_key) = self.output_key {
            wire.output_key = required("output_key", Some(output_key))?;
        }
        warn_undeclared(wire);
        Ok(())
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, CliError> {
    match value.map(|v| v.trim().to_owned()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingField(field.to_owned()).into()),
    }
}

fn declared_inputs(pairs: Vec<(String, String)>) -> Result<BTreeMap<String, String>, CliError> {
    pairs
        .into_iter()
        .map(|(name, hint)| {
            if is_valid_name(&name) { Ok((name, hint)) } else { Err(CliError::InvalidInputName(name)) }
        })
        .collect()
}

fn warn_undeclared(wire: &Wire) {
    let undeclared = wire.undeclared_placeholders();
    if !undeclared.is_empty() {
        tracing::warn!(wire_id = %wire.wire_id, undeclared = ?undeclared, "prompt uses undeclared inputs");
    }
}

/// Parse a wireflow document.
pub fn parse_wireflow(text: &str) -> Result<Wireflow, CliError> {
    let wireflow: Wireflow = serde_json::from_str(text)?;
    if wireflow.wireflow_id.trim().is_empty() {
        return Err(ApiError::MissingField("wireflow_id".to_owned()).into());
    }
    Ok(wireflow)
}

/// Read a wireflow from `path`. For updates, `keep_id` replaces whatever id
/// the file carries, and the file may leave the id out.
pub fn read_wireflow(path: &Path, keep_id: Option<&str>) -> Result<Wireflow, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::ReadFile { path: path.display().to_string(), message: e.to_string() })?;
    let Some(id) = keep_id else {
        return parse_wireflow(&text);
    };

    let mut value: Value = serde_json::from_str(&text)?;
    if let Some(object) = value.as_object_mut() {
        if let Some(file_id) = object.get("wireflow_id").and_then(Value::as_str).filter(|f| !f.is_empty() && *f != id) {
            tracing::warn!(file_id, id, "ignoring wireflow id from file");
        }
        object.insert("wireflow_id".to_owned(), Value::String(id.to_owned()));
    }
    Ok(serde_json::from_value(value)?)
}
