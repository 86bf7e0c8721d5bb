//! Server configuration parsed from environment variables.

use aftertrials_client::state::site::{CheckoutConfig, JoinVariant, SiteConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WAITLIST_ACTION: &str = "/waitlist";

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was present but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The checkout variant needs vendor settings that were not provided.
    #[error("{var} is required when SITE_VARIANT=checkout")]
    MissingCheckout { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_VARIANT`: `waitlist` (default) or `checkout`
    /// - `WAITLIST_ACTION`: form target, default `/waitlist`
    ///
    /// Required when `SITE_VARIANT=checkout`:
    /// - `CHECKOUT_BUTTON_ID`
    /// - `CHECKOUT_SDK_URL`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unparseable values or an incomplete
    /// checkout setup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let variant = parse_variant(non_empty(lookup("SITE_VARIANT")).as_deref())?;
        let waitlist_action =
            non_empty(lookup("WAITLIST_ACTION")).unwrap_or_else(|| DEFAULT_WAITLIST_ACTION.to_string());

        let checkout = match variant {
            JoinVariant::Waitlist => None,
            JoinVariant::Checkout => {
                let button_id = non_empty(lookup("CHECKOUT_BUTTON_ID"))
                    .ok_or(ConfigError::MissingCheckout { var: "CHECKOUT_BUTTON_ID" })?;
                let sdk_url = non_empty(lookup("CHECKOUT_SDK_URL"))
                    .ok_or(ConfigError::MissingCheckout { var: "CHECKOUT_SDK_URL" })?;
                Some(CheckoutConfig { button_id, sdk_url })
            }
        };

        Ok(Self { port, site: SiteConfig { variant, checkout, waitlist_action } })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_variant(raw: Option<&str>) -> Result<JoinVariant, ConfigError> {
    match raw.unwrap_or("waitlist") {
        "waitlist" => Ok(JoinVariant::Waitlist),
        "checkout" => Ok(JoinVariant::Checkout),
        other => Err(ConfigError::Invalid { var: "SITE_VARIANT", value: other.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
