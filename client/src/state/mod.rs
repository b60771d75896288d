//! Client-side page and dialog state.
//!
//! ARCHITECTURE
//! ============
//! Plain structs with transition methods; pages wrap them in `RwSignal`s.
//! Keeping the transitions here lets them be unit tested without a browser.

pub mod builder;
pub mod execute;
pub mod ui;
pub mod wire_form;
pub mod wireflows;
pub mod wires;
