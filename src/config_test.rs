use super::*;

#[test]
fn blank_input_yields_defaults() {
    assert_eq!(SiteConfig::from_json("").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
}

#[test]
fn defaults_match_site_constants() {
    let cfg = SiteConfig::default();
    assert!((cfg.header_threshold_px - 50.0).abs() < f64::EPSILON);
    assert!((cfg.reveal_threshold - 0.2).abs() < f64::EPSILON);
    assert_eq!(cfg.idle_fallback_ms, 3_000);
    assert!(cfg.deferred_stylesheet.contains("font-awesome/6.4.0"));
    assert_eq!(cfg.log_level, log::LevelFilter::Info);
}

#[test]
fn partial_overrides_keep_remaining_defaults() {
    let cfg = SiteConfig::from_json(r#"{"headerThresholdPx": 120, "logLevel": "debug"}"#).unwrap();
    assert!((cfg.header_threshold_px - 120.0).abs() < f64::EPSILON);
    assert_eq!(cfg.log_level, log::LevelFilter::Debug);
    assert_eq!(cfg.idle_fallback_ms, DEFAULT_IDLE_FALLBACK_MS);
    assert_eq!(cfg.deferred_stylesheet, DEFAULT_DEFERRED_STYLESHEET);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = SiteConfig::from_json(r#"{"headerThreshold": 10}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn negative_header_threshold_is_invalid() {
    let err = SiteConfig::from_json(r#"{"headerThresholdPx": -1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "headerThresholdPx", .. }));
}

#[test]
fn reveal_threshold_outside_unit_range_is_invalid() {
    let err = SiteConfig::from_json(r#"{"revealThreshold": 1.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "revealThreshold", .. }));
    assert!(SiteConfig::from_json(r#"{"revealThreshold": 0}"#).is_ok());
    assert!(SiteConfig::from_json(r#"{"revealThreshold": 1}"#).is_ok());
}

#[test]
fn empty_stylesheet_url_is_invalid() {
    let err = SiteConfig::from_json(r#"{"deferredStylesheet": " "}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid site config value for deferredStylesheet: empty URL");
}
