//! # client
//!
//! Leptos + WASM frontend for the message moderation dashboard.
//!
//! This crate contains the moderation page, card components, application
//! state, REST types, and the polling/mutation plumbing against the
//! moderation backend. The `server` crate renders the shell and serves the
//! compiled assets; all domain data comes from the external backend API.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the browser after the bundle loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
