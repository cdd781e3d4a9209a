//! # agrovault-client
//!
//! Leptos + WASM frontend for the AgroVault warehouse-receipt and
//! agricultural-credit application. Replaces the React `client/` with a
//! Rust-native UI layer.
//!
//! The crate contains pages, components, application state, the persisted
//! session store, and the JSON request gateway used to talk to the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
