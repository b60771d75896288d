//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the backend REST surface; URL construction and the shared
//! error type live in the `wires` crate so the CLI builds the same requests.

pub mod api;
