//! # client
//!
//! Leptos + WASM frontend for SoundMap, plus the auth/session layer it is
//! built on.
//!
//! The session store, auth client, route guard and region table compile
//! natively too, so the CLI and tests use them without a browser. Browser
//! glue (`gloo-net` transport, `localStorage`, mounting) sits behind the
//! `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
