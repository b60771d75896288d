//! Shared wire/wireflow model for the GeminiWire client and CLI.
//!
//! This crate owns the JSON shapes exchanged with the GeminiWire backend.
//! It has no HTTP dependency of its own: `client` talks to the backend with
//! `gloo-net`, `cli` with `reqwest`, and both build requests and decode
//! responses through the types defined here.

pub mod endpoints;
pub mod error;
pub mod execute;
pub mod model;
pub mod placeholder;

pub use endpoints::{DEFAULT_API_BASE_URL, Endpoints};
pub use error::ApiError;
pub use execute::{ExecuteRequest, ExecuteResult, InputError, Inputs, validate_inputs};
pub use model::{StepLink, Wire, Wireflow, WireflowStep, find_wire, find_wireflow};
pub use placeholder::prompt_placeholders;
