//! pista-bridge web server and UI.
//!
//! Hosts the page an OAuth provider redirects to after an implicit-flow
//! login. The page reads the fragment in the browser and forwards it to the
//! Pista app through its custom URL scheme, or falls back to `/login`.

#![allow(non_snake_case)]

pub mod app;
pub mod browser;
#[cfg(feature = "ssr")]
pub mod config;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
