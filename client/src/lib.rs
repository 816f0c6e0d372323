//! # client
//!
//! Leptos + WASM frontend for DeepCheck: signup and login forms backed by the
//! remote auth API, plus the placeholder deepfake detection page.
//!
//! The form workflow itself lives in the `authflow` crate. This crate wires it
//! to the DOM, to `gloo-net` for HTTP, and to `localStorage` for the session.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
