//! MovieReview - Movie catalog and review web application
//!
//! A full-stack web application for browsing movies, writing reviews and
//! managing a catalog, built with Leptos and WebAssembly. The backend REST
//! API is external; this crate renders the UI shell on the server and talks
//! to the API from the browser.

#![recursion_limit = "4096"]

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
