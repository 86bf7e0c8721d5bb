use super::*;

fn checkout() -> CheckoutConfig {
    CheckoutConfig { button_id: "BTN-123".to_owned(), sdk_url: "https://pay.example.test/sdk.js".to_owned() }
}

#[test]
fn default_config_is_waitlist() {
    let config = SiteConfig::default();
    assert_eq!(config.variant, JoinVariant::Waitlist);
    assert_eq!(config.join_target(), JoinTarget::Waitlist { action: "/waitlist".to_owned() });
}

#[test]
fn checkout_variant_resolves_to_checkout() {
    let config = SiteConfig { variant: JoinVariant::Checkout, checkout: Some(checkout()), ..SiteConfig::default() };
    assert_eq!(config.join_target(), JoinTarget::Checkout(checkout()));
}

#[test]
fn checkout_variant_without_settings_falls_back_to_waitlist() {
    let config = SiteConfig { variant: JoinVariant::Checkout, checkout: None, ..SiteConfig::default() };
    assert!(matches!(config.join_target(), JoinTarget::Waitlist { .. }));
}

#[test]
fn waitlist_variant_ignores_checkout_settings() {
    let config = SiteConfig { checkout: Some(checkout()), ..SiteConfig::default() };
    assert!(matches!(config.join_target(), JoinTarget::Waitlist { .. }));
}

#[test]
fn embedded_json_escapes_script_terminators() {
    let config = SiteConfig { waitlist_action: "</script><b>".to_owned(), ..SiteConfig::default() };
    let json = config.to_embedded_json();
    assert!(!json.contains('<'));
    assert_eq!(SiteConfig::from_embedded_json(&json), config);
}

#[test]
fn embedded_json_uses_snake_case_variant() {
    let config = SiteConfig { variant: JoinVariant::Checkout, checkout: Some(checkout()), ..SiteConfig::default() };
    assert!(config.to_embedded_json().contains(r#""variant":"checkout""#));
}

#[test]
fn malformed_json_falls_back_to_default() {
    assert_eq!(SiteConfig::from_embedded_json("not json"), SiteConfig::default());
    assert_eq!(SiteConfig::from_embedded_json(r#"{"variant":"lottery"}"#), SiteConfig::default());
}
