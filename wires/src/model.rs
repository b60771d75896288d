//! Wire and wireflow records as the backend stores them.
//!
//! Both records use an object (`name -> text`) for `inputs`. The backend is
//! the sole source of truth; nothing here is cached or persisted.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::placeholder::{prompt_placeholders, single_placeholder};

/// A single named prompt-execution unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    pub wire_id: String,
    #[serde(default)]
    pub description: String,
    /// Template text; `{name}` marks an input placeholder.
    #[serde(default)]
    pub prompt: String,
    /// Declared input names mapped to their placeholder/help text.
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
    #[serde(default)]
    pub output_key: String,
}

impl Wire {
    /// Placeholders used in the prompt but not declared in `inputs`.
    #[must_use]
    pub fn undeclared_placeholders(&self) -> Vec<String> {
        prompt_placeholders(&self.prompt)
            .into_iter()
            .filter(|name| !self.inputs.contains_key(name))
            .collect()
    }
}

/// One position in a wireflow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireflowStep {
    pub wire_id: String,
    /// Values bound to the wire's inputs; empty means "ask at execution time".
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
    #[serde(default)]
    pub output_key: String,
}

impl WireflowStep {
    /// New step for `wire` with every declared input initialized to `""`.
    #[must_use]
    pub fn from_wire(wire: &Wire) -> Self {
        Self {
            wire_id: wire.wire_id.clone(),
            inputs: wire.inputs.keys().map(|k| (k.clone(), String::new())).collect(),
            output_key: wire.output_key.clone(),
        }
    }
}

/// An input of one step that consumes the output of an earlier step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepLink {
    /// Index of the consuming step.
    pub step: usize,
    pub input: String,
    /// Index of the producing step.
    pub source: usize,
}

/// An ordered chain of wires.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wireflow {
    pub wireflow_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub wires: Vec<WireflowStep>,
}

impl Wireflow {
    /// Step inputs whose value is exactly `{key}` for the `output_key` of an
    /// earlier step. The nearest earlier producer wins.
    #[must_use]
    pub fn links(&self) -> Vec<StepLink> {
        let mut links = Vec::new();
        for (step, current) in self.wires.iter().enumerate() {
            for (input, value) in &current.inputs {
                let Some(key) = single_placeholder(value) else {
                    continue;
                };
                let source = self.wires[..step]
                    .iter()
                    .rposition(|earlier| !earlier.output_key.is_empty() && earlier.output_key == key);
                if let Some(source) = source {
                    links.push(StepLink { step, input: input.clone(), source });
                }
            }
        }
        links
    }

    /// Input names left blank across all steps, deduplicated in step order.
    /// These are the values an execution has to supply.
    #[must_use]
    pub fn required_inputs(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for step in &self.wires {
            for (name, value) in &step.inputs {
                if value.trim().is_empty() && !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}

/// Look up a wire by id.
#[must_use]
pub fn find_wire<'a>(wires: &'a [Wire], wire_id: &str) -> Option<&'a Wire> {
    wires.iter().find(|w| w.wire_id == wire_id)
}

/// Look up a wireflow by id.
#[must_use]
pub fn find_wireflow<'a>(wireflows: &'a [Wireflow], wireflow_id: &str) -> Option<&'a Wireflow> {
    wireflows.iter().find(|w| w.wireflow_id == wireflow_id)
}
