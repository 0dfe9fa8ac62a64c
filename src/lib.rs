//! # farmagent-ui
//!
//! Leptos + WASM frontend for the FarmAgent advisory backend.
//! Replaces the hand-rolled JS glue layer with a Rust-native UI layer.
//!
//! This crate contains components, application state, network types, and the
//! HTTP request flow against the backend's `/upload` and `/run_plan`
//! endpoints. Browser-only behavior (fetch, timers, object URLs) lives behind
//! the `hydrate` feature so the rest of the crate compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
