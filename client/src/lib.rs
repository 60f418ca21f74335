//! # client
//!
//! Leptos + WASM frontend for gatehouse: a login/signup form in front of a
//! signed-in home screen, both served from `/`.
//!
//! Form rules, submission and session state live in `authflow`; this crate
//! keeps them in signals, renders them, and supplies the browser transport.

pub mod app;
pub mod net;
pub mod pages;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("browser logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
