//! # folio
//!
//! Leptos + WASM front-end for the portfolio gallery.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client for the portfolio API. Browser-only behavior lives
//! behind the `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
