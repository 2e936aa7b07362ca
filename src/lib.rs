//! # results-ui
//!
//! Leptos + WASM page behaviors for the exam results portal: a persisted
//! light/dark theme toggle and click-to-sort result tables.
//!
//! The crate has two surfaces over the same state types. `enhance` binds to
//! server-rendered markup on hydrate; `components` renders the same behavior
//! as Leptos views. Ordering and theme logic live in `state` and `util` and
//! are tested natively.

pub mod components;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod enhance;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and bind page behaviors.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    enhance::enhance_document();
}
