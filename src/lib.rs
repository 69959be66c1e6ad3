//! # tutor-ui
//!
//! Leptos + WASM frontend for the AI learning assistant page.
//!
//! The page has two sections: query understanding (free-text analysis of a
//! learner's question) and adaptive learning (next-step recommendations from
//! the learner's score, attempts and time). Both are backed by an external
//! JSON service; this crate owns only the form state, the HTTP calls and
//! the rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console_log init failed: {err}").into());
    }
    log::info!("tutor-ui starting");
    leptos::mount::mount_to_body(app::App);
}
