//! Site-wide configuration shared between the SSR host and the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a `SiteConfig` from its environment and embeds it as JSON
//! in the HTML shell; the browser reads the same blob back before hydrating so
//! both renders agree on which join collaborator the final slide shows.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use serde::{Deserialize, Serialize};

/// DOM id of the `<script type="application/json">` carrying the config.
pub const SITE_CONFIG_ELEMENT_ID: &str = "site-config";

/// Which external collaborator the offer slide hosts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinVariant {
    /// Lead-capture form.
    #[default]
    Waitlist,
    /// Third-party payment button.
    Checkout,
}

/// Opaque payment embed settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Vendor-issued button identifier; never interpreted here.
    pub button_id: String,
    /// Script that renders the button into its container.
    pub sdk_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub variant: JoinVariant,
    pub checkout: Option<CheckoutConfig>,
    /// Form `action` URL for the lead-capture form.
    pub waitlist_action: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { variant: JoinVariant::Waitlist, checkout: None, waitlist_action: "/waitlist".to_owned() }
    }
}

/// What the offer slide actually renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinTarget {
    Waitlist { action: String },
    Checkout(CheckoutConfig),
}

impl SiteConfig {
    /// Resolve the join collaborator. A checkout variant without checkout
    /// settings degrades to the waitlist form.
    pub fn join_target(&self) -> JoinTarget {
        match (self.variant, &self.checkout) {
            (JoinVariant::Checkout, Some(checkout)) => JoinTarget::Checkout(checkout.clone()),
            _ => JoinTarget::Waitlist { action: self.waitlist_action.clone() },
        }
    }

    /// JSON safe to inline inside a `<script>` element.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace('<', "\\u003c")
    }

    /// Parse the embedded blob, falling back to defaults on any mismatch.
    pub fn from_embedded_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("site config unreadable, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Read the config the server embedded in the page.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(SITE_CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .map_or_else(Self::default, |raw| Self::from_embedded_json(&raw))
    }
}
