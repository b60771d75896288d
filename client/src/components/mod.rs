//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render lists, dialogs and the wireflow builder. They read and
//! write page state through signals and callbacks handed down by the pages;
//! only `notification` and `execute_modal` reach into context directly.

pub mod confirm_dialog;
pub mod error_banner;
pub mod execute_modal;
pub mod loading_spinner;
pub mod modal;
pub mod nav_header;
pub mod notification;
pub mod wire_detail;
pub mod wire_form;
pub mod wire_list;
pub mod wireflow_builder;
pub mod wireflow_list;
