//! # portfolio-ui
//!
//! Leptos + WASM frontend for the personal portfolio page.
//!
//! This crate contains the page, its components, the static content set,
//! and the session controller that runs the splash timer and persists the
//! light/dark preference. The `portfolio` server renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
