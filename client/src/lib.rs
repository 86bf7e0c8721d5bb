//! # aftertrials-client
//!
//! Leptos + WASM front end for the After Trials landing page.
//!
//! The page is a deck of twelve full-viewport slides browsed by horizontal
//! swipe, with a toggle that re-flows the same deck into vertical scroll and
//! rotates its content for a landscape read on a portrait-held phone. This
//! crate holds the orientation model, slide navigation, fragment routing, the
//! simulated demo chat, and the external join collaborators.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: read the embedded config and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::state::site::SiteConfig;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }

    let config = SiteConfig::from_document();
    log::debug!("hydrating with join variant {:?}", config.variant);
    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
