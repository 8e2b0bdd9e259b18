//! landing_fx - Anna Laura AI landing page
//!
//! A Leptos landing page with a WebAssembly effects layer: matrix rain,
//! floating particles, scroll reveals, button feedback, stat counters and
//! parallax orbs.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
    crate::ui::effects::install();
}
