//! Execution requests, results, and the strict input check that runs before
//! any execute call leaves the process.

#[cfg(test)]
#[path = "execute_test.rs"]
mod execute_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Input values keyed by input name.
pub type Inputs = BTreeMap<String, String>;

/// Error returned by [`validate_inputs`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// One or more declared inputs are blank.
    #[error("please fill in: {}", .0.join(", "))]
    Missing(Vec<String>),
    /// A value was supplied for an input the target does not declare.
    #[error("unknown input `{0}`")]
    Unknown(String),
}

/// Check that every declared input has a non-blank value and nothing else
/// was supplied. Returns the values for the declared names only.
///
/// # Errors
///
/// [`InputError::Unknown`] for the first undeclared name, otherwise
/// [`InputError::Missing`] listing every blank input in declaration order.
pub fn validate_inputs<'a, I>(declared: I, provided: &Inputs) -> Result<Inputs, InputError>
where
    I: IntoIterator<Item = &'a str>,
{
    let declared: Vec<&str> = declared.into_iter().collect();
    if let Some(unknown) = provided.keys().find(|k| !declared.contains(&k.as_str())) {
        return Err(InputError::Unknown(unknown.clone()));
    }

    let missing: Vec<String> = declared
        .iter()
        .filter(|name| provided.get(**name).is_none_or(|v| v.trim().is_empty()))
        .map(|name| (*name).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(InputError::Missing(missing));
    }

    Ok(declared
        .iter()
        .filter_map(|name| provided.get(*name).map(|v| ((*name).to_owned(), v.clone())))
        .collect())
}

/// Body of a `POST /wires/execute` or `POST /wireflows/execute` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExecuteRequest {
    Wire { wire_id: String, inputs: Inputs },
    Wireflow { wireflow_id: String, inputs: Inputs },
}

impl ExecuteRequest {
    /// Id of the wire or wireflow being executed.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Wire { wire_id, .. } => wire_id,
            Self::Wireflow { wireflow_id, .. } => wireflow_id,
        }
    }

    #[must_use]
    pub fn inputs(&self) -> &Inputs {
        match self {
            Self::Wire { inputs, .. } | Self::Wireflow { inputs, .. } => inputs,
        }
    }

    /// `"wire"` or `"wireflow"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Wire { .. } => "wire",
            Self::Wireflow { .. } => "wireflow",
        }
    }
}

/// Backend response to an execute call.
///
/// Wires answer with `output`, wireflows with `final_output`; either may
/// carry `error`. Everything else is kept in `extra` for the raw JSON view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExecuteResult {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.trim().is_empty())
    }

    /// Text shown to the user: the error, else `output`, else
    /// `final_output`. String values are shown verbatim; other JSON is
    /// pretty-printed.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.is_error() {
            return self.error.clone().unwrap_or_default();
        }
        self.output
            .as_ref()
            .or(self.final_output.as_ref())
            .map_or_else(|| "(no output)".to_owned(), value_text)
    }

    /// Full response pretty-printed, including unrecognized fields.
    #[must_use]
    pub fn raw_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "(no output)".to_owned(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}
