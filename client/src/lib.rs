//! # client
//!
//! Leptos + WASM frontend for the AstroMentor astronomy site.
//!
//! This crate contains pages, components, view-local state, REST helpers
//! for the server's lookup proxies, and the map host that drives the sky
//! engine through the `sky` crate's command interface.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
