#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_design() {
    let cfg = PortfolioConfig::default();
    assert_eq!(cfg.scroll_offset, 80.0);
    assert_eq!(cfg.animation_delay, 100);
    assert_eq!(cfg.debounce_delay, 250);
    assert_eq!(cfg.throttle_delay, 100);
    assert_eq!(cfg.mobile_breakpoint, 768.0);
    assert_eq!(cfg.navbar_scroll_threshold, 50.0);
    assert_eq!(cfg.counter_duration, 2000);
    assert_eq!(cfg.message_duration, 5000);
}

#[test]
fn from_json_overrides_only_given_keys() {
    let cfg = PortfolioConfig::from_json(r#"{ "scrollOffset": 96, "mobileBreakpoint": 900 }"#).unwrap();
    assert_eq!(cfg.scroll_offset, 96.0);
    assert_eq!(cfg.mobile_breakpoint, 900.0);
    assert_eq!(cfg.animation_delay, DEFAULT_ANIMATION_DELAY_MS);
    assert_eq!(cfg.message_duration, DEFAULT_MESSAGE_DURATION_MS);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(PortfolioConfig::from_json("{}").unwrap(), PortfolioConfig::default());
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = PortfolioConfig::from_json(r#"{ "scrollOfset": 96 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("config parse failed"));
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(PortfolioConfig::from_json("{ scrollOffset: "), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_negative_offset() {
    let err = PortfolioConfig::from_json(r#"{ "scrollOffset": -4 }"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid config value for scrollOffset: must be a non-negative number");
}

#[test]
fn from_json_rejects_zero_breakpoint_and_durations() {
    assert!(matches!(
        PortfolioConfig::from_json(r#"{ "mobileBreakpoint": 0 }"#),
        Err(ConfigError::Invalid { field: "mobileBreakpoint", .. })
    ));
    assert!(matches!(
        PortfolioConfig::from_json(r#"{ "counterDuration": 0 }"#),
        Err(ConfigError::Invalid { field: "counterDuration", .. })
    ));
    assert!(matches!(
        PortfolioConfig::from_json(r#"{ "throttleDelay": 0 }"#),
        Err(ConfigError::Invalid { field: "throttleDelay", .. })
    ));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_without_browser_is_default() {
    assert_eq!(PortfolioConfig::load(), PortfolioConfig::default());
}
