//! Wireflow builder state: Details -> Wires -> Review.
//!
//! DESIGN
//! ======
//! Drag and drop is reduced to `drop_wire(source, target)` so the DOM layer
//! only has to say where a drag started and where it ended. Every selected
//! step carries a stable key for keyed list rendering; reorders move keys
//! with their steps.
//!
//! Steps are not gated on content: the only check between pages is that a
//! wireflow id is present before leaving Details.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use uuid::Uuid;
use wires::{Wire, Wireflow, WireflowStep, find_wire};

/// Builder page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuilderStep {
    #[default]
    Details,
    Wires,
    Review,
}

impl BuilderStep {
    /// 1-based position for the step indicator.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::Details => 1,
            Self::Wires => 2,
            Self::Review => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Details",
            Self::Wires => "Wires",
            Self::Review => "Review",
        }
    }
}

/// Where a drag started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// A card in the available-wires list, by wire id.
    Available(String),
    /// A card in the selected list, by position.
    Selected(usize),
}

/// Where a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    Available,
    /// Insert before this position in the selected list.
    Selected(usize),
    Outside,
}

/// Why the builder refused to advance or save.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    #[error("Wireflow ID is required")]
    MissingId,
}

/// A wire placed in the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedStep {
    pub key: Uuid,
    pub step: WireflowStep,
}

impl SelectedStep {
    fn new(step: WireflowStep) -> Self {
        Self { key: Uuid::new_v4(), step }
    }
}

/// Wireflow builder contents.
#[derive(Clone, Debug, Default)]
pub struct WireflowBuilder {
    pub wireflow_id: String,
    pub description: String,
    editing: bool,
    pub step: BuilderStep,
    pub available: Vec<Wire>,
    pub selected: Vec<SelectedStep>,
    pub saving: bool,
    pub error: Option<String>,
}

impl WireflowBuilder {
    #[must_use]
    pub fn create(available: Vec<Wire>) -> Self {
        Self { available, ..Self::default() }
    }

    /// Builder seeded from an existing wireflow; the id is locked.
    #[must_use]
    pub fn edit(wireflow: &Wireflow, available: Vec<Wire>) -> Self {
        Self {
            wireflow_id: wireflow.wireflow_id.clone(),
            description: wireflow.description.clone(),
            editing: true,
            available,
            selected: wireflow.wires.iter().cloned().map(SelectedStep::new).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.editing
    }

    /// No-op in edit mode.
    pub fn set_wireflow_id(&mut self, value: String) {
        if !self.editing {
            self.wireflow_id = value;
        }
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
    }

    /// Advance one page.
    ///
    /// # Errors
    ///
    /// [`BuilderError::MissingId`] when leaving Details with a blank id; the
    /// message is also stored in `error`.
    pub fn next(&mut self) -> Result<BuilderStep, BuilderError> {
        self.step = match self.step {
            BuilderStep::Details => {
                if self.wireflow_id.trim().is_empty() {
                    self.error = Some(BuilderError::MissingId.to_string());
                    return Err(BuilderError::MissingId);
                }
                BuilderStep::Wires
            }
            BuilderStep::Wires | BuilderStep::Review => BuilderStep::Review,
        };
        self.error = None;
        Ok(self.step)
    }

    /// Go back one page.
    pub fn back(&mut self) -> BuilderStep {
        self.step = match self.step {
            BuilderStep::Details | BuilderStep::Wires => BuilderStep::Details,
            BuilderStep::Review => BuilderStep::Wires,
        };
        self.error = None;
        self.step
    }

    /// Apply a finished drag. Anything that is not a known wire moving onto
    /// the selected list, a reorder, or a selected card returned to the
    /// available list is ignored.
    pub fn drop_wire(&mut self, source: DragSource, target: DropTarget) {
        match (source, target) {
            (DragSource::Available(wire_id), DropTarget::Selected(index)) => {
                self.insert_wire(&wire_id, index);
            }
            (DragSource::Selected(from), DropTarget::Selected(to)) => self.move_step(from, to),
            (DragSource::Selected(index), DropTarget::Available) => self.remove_step(index),
            _ => {}
        }
    }

    /// Add `wire_id` at the end of the flow.
    pub fn append_wire(&mut self, wire_id: &str) {
        self.insert_wire(wire_id, self.selected.len());
    }

    /// Remove the step at `from` and reinsert it at `to` (clamped).
    pub fn move_step(&mut self, from: usize, to: usize) {
        if from >= self.selected.len() {
            return;
        }
        let item = self.selected.remove(from);
        let to = to.min(self.selected.len());
        self.selected.insert(to, item);
    }

    pub fn remove_step(&mut self, index: usize) {
        if index < self.selected.len() {
            self.selected.remove(index);
        }
    }

    pub fn set_step_input(&mut self, index: usize, name: &str, value: String) {
        if let Some(selected) = self.selected.get_mut(index) {
            if let Some(slot) = selected.step.inputs.get_mut(name) {
                *slot = value;
            }
        }
    }

    /// Declared wire for a selected step, when it is still available.
    #[must_use]
    pub fn wire_for(&self, index: usize) -> Option<&Wire> {
        let selected = self.selected.get(index)?;
        find_wire(&self.available, &selected.step.wire_id)
    }

    /// Current contents as a wireflow, without validation. Used by Review.
    #[must_use]
    pub fn preview(&self) -> Wireflow {
        Wireflow {
            wireflow_id: self.wireflow_id.trim().to_owned(),
            description: self.description.trim().to_owned(),
            wires: self.selected.iter().map(|s| s.step.clone()).collect(),
        }
    }

    /// Wireflow to save.
    ///
    /// # Errors
    ///
    /// [`BuilderError::MissingId`] when the id is blank.
    pub fn to_wireflow(&self) -> Result<Wireflow, BuilderError> {
        let wireflow = self.preview();
        if wireflow.wireflow_id.is_empty() {
            return Err(BuilderError::MissingId);
        }
        Ok(wireflow)
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.error = None;
    }

    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.error = Some(message.into());
    }

    fn insert_wire(&mut self, wire_id: &str, index: usize) {
        let Some(wire) = find_wire(&self.available, wire_id) else {
            return;
        };
        let step = SelectedStep::new(WireflowStep::from_wire(wire));
        let index = index.min(self.selected.len());
        self.selected.insert(index, step);
    }
}
