//! # client
//!
//! Leptos + WASM frontend for Service Connect.
//!
//! This crate contains the login, registration and home pages, the profile,
//! service-catalogue and create-request panels, session state, and the REST
//! helpers that reach the backend through the host's `/api` prefix.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating service-connect client");
    leptos::mount::hydrate_body(app::App);
}
