//! # robonerve-client
//!
//! Leptos + WASM frontend for the RoboNerve textbook site.
//!
//! The site is pre-rendered on the server and hydrated in the browser. This
//! crate owns the reader-facing auth layer: the session store, the
//! login/signup modal, and the navbar entries that reflect session state.
//! Everything browser-specific (storage, alerts, reloads, HTTP) sits behind
//! small traits so the same state machines run during SSR and in tests.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating robonerve client");
    leptos::mount::hydrate_body(app::App);
}
