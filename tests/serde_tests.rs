#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Serialization tests for the `serde` feature
use search_sync::{Config, HistoryMode, HistoryState, QueryParams};

#[test]
fn test_history_state_is_empty_object() {
    assert_eq!(serde_json::to_string(&HistoryState::default()).unwrap(), "{}");
}

#[test]
fn test_config_defaults_reset() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert!(config.reset);
    let config: Config = serde_json::from_str(r#"{"reset":false}"#).unwrap();
    assert_eq!(config.history_mode(), HistoryMode::Push);
}

#[test]
fn test_params_as_map() {
    let params = QueryParams::parse("b=2&a=1&tag=x&tag=y");
    let json = serde_json::to_string(&params).unwrap();
    assert_eq!(json, r#"{"b":"2","a":"1","tag":["x","y"]}"#);

    let back: QueryParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}
