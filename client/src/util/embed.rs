//! Third-party checkout embed mounting.
//!
//! The payment button is an opaque vendor widget: we hand its script a
//! container and a button id and never look at the result. Re-running the
//! vendor script duplicates the widget, so every container owns a
//! `MountGuard` that lets the mount routine run at most once for that
//! container's lifetime.

#[cfg(test)]
#[path = "embed_test.rs"]
mod embed_test;

use std::cell::Cell;

#[cfg(feature = "hydrate")]
use crate::state::site::CheckoutConfig;

/// Attribute carrying the opaque button id on the container and script.
pub const BUTTON_ID_ATTR: &str = "data-button-id";

/// "Has this container been mounted" marker.
#[derive(Debug, Default)]
pub struct MountGuard {
    mounted: Cell<bool>,
}

impl MountGuard {
    /// Run `mount` unless this guard already ran it.
    ///
    /// The marker is set before `mount` executes, so an attempt whose outcome
    /// is unknown is never repeated. Returns whether `mount` ran.
    pub fn run_once(&self, mount: impl FnOnce()) -> bool {
        if self.mounted.replace(true) {
            return false;
        }
        mount();
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

/// Inject the vendor script into `container`.
#[cfg(feature = "hydrate")]
pub fn mount_checkout(container: &web_sys::HtmlElement, config: &CheckoutConfig) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let document = container
        .owner_document()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("container has no document"))?;
    container.set_attribute(BUTTON_ID_ATTR, &config.button_id)?;

    let script = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()
        .map_err(|_| wasm_bindgen::JsValue::from_str("script element cast failed"))?;
    script.set_src(&config.sdk_url);
    script.set_async(true);
    script.set_attribute(BUTTON_ID_ATTR, &config.button_id)?;
    container.append_child(&script)?;

    log::debug!("checkout embed mounted for button {}", config.button_id);
    Ok(())
}
