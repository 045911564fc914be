//! # client
//!
//! Leptos + WASM frontend for the escrow portal.
//!
//! This crate contains the bank-linking and escrow pages, their components,
//! client state, and the REST helpers. The bank-link sequencing itself lives
//! in the `linkflow` crate; this crate wires it to signals, HTTP and the
//! hosted Plaid widget.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("escrow portal hydrating");
    leptos::mount::hydrate_body(app::App);
}
