//! # client
//!
//! Leptos + WASM front end for GeminiWire: list, edit, chain and execute
//! wires and wireflows stored by the GeminiWire backend.
//!
//! This crate contains pages, components, page state, and the REST helpers
//! used from the browser. Record shapes come from the shared `wires` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
