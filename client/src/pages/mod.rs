//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its list state and the request orchestration for it
//! (fetch, save, delete) and delegates rendering details to `components`.


pub mod guide;
pub mod wireflows;
pub mod wires;

/// Toast text after a successful create or update.
pub(crate) fn saved_message(noun: &str, id: &str, editing: bool) -> String {
    let verb = if editing { "updated" } else { "created" };
    format!("{noun} \"{id}\" {verb}")
}

/// Toast text after a successful delete.
pub(crate) fn deleted_message(noun: &str, id: &str) -> String {
    format!("{noun} \"{id}\" deleted")
}
