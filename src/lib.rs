//! # social-client
//!
//! Leptos + WASM frontend for the social pages of the pong site: the friend
//! list, the sliding drawer panel (with the paginated chat room drawer) and
//! the modal manager.
//!
//! Browser-only code is gated behind the `csr` feature. Without it the crate
//! builds natively so the drawer, chat room and modal state machines can be
//! unit tested against fake network collaborators.

pub mod app;
pub mod components;
pub mod config;
pub mod drawer;
pub mod modal;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
