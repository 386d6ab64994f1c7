//! # client
//!
//! Leptos + WASM browser client for the data relay.
//!
//! The client never holds credentials. It infers whether the gateway session
//! is alive from the side effects of an ordinary data request and switches
//! between a logged-out and a logged-in view accordingly.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
