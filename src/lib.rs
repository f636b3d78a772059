//! AI DJ Pro - landing site
//!
//! A scroll-driven product page built with Leptos: a canvas hero that scrubs
//! through a preloaded frame sequence, followed by reveal-on-scroll content
//! with zoomable imagery. The server renders the page and describes the frame
//! set it finds on disk.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
