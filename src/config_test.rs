#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_stock_page() {
    let config = SiteConfig::default();
    assert_eq!(config.nav.scrolled_threshold_px, 50.0);
    assert_eq!(config.nav.active_offset_px, 100.0);
    assert_eq!(config.scroll.back_to_top_threshold_px, 500.0);
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.typewriter.phrases.len(), 5);
    assert_eq!(config.loading_delay_ms, 2500);
}

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").expect("empty config should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let raw = r#"{ "nav": { "scrolled_threshold_px": 80 }, "typewriter": { "phrases": ["Rustacean"] } }"#;
    let config = SiteConfig::from_json(raw).expect("partial config should parse");
    assert_eq!(config.nav.scrolled_threshold_px, 80.0);
    assert_eq!(config.nav.active_offset_px, 100.0);
    assert_eq!(config.typewriter.phrases, vec!["Rustacean".to_owned()]);
    assert_eq!(config.typewriter.type_ms, 150);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteConfig::from_json("{ nav: ").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn failure_rate_out_of_range_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "contact": { "failure_rate": 1.5 } }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "contact.failure_rate", .. }));
}

#[test]
fn zero_frame_interval_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "counter": { "frame_ms": 0 } }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "counter.frame_ms", .. }));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "theme_storage_key": "" }"#).expect_err("should fail");
    assert!(err.to_string().contains("theme_storage_key"));
}
