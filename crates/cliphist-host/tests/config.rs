use cliphist_host::{PluginConfig, PluginError};
use pretty_assertions::assert_eq;

#[test]
fn test_missing_settings_fall_back_to_defaults() {
    let config = PluginConfig::from_json("{}").unwrap();
    assert_eq!(config, PluginConfig::default());
    assert_eq!(config.capacity(), 12);
}

#[test]
fn test_history_size_is_read_from_json() {
    let config = PluginConfig::from_json(r#"{"historySize": 30}"#).unwrap();
    assert_eq!(config.history_size, 30);
    assert_eq!(config.capacity(), 30);
}

#[test]
fn test_legacy_size_key_is_accepted() {
    let config = PluginConfig::from_json(r#"{"size": 7}"#).unwrap();
    assert_eq!(config.history_size, 7);
}

#[test]
fn test_zero_size_still_retains_one_entry() {
    let config = PluginConfig::from_json(r#"{"size": 0}"#).unwrap();
    assert_eq!(config.capacity(), 1);
}

#[test]
fn test_malformed_json_is_a_config_error() {
    let err = PluginConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, PluginError::Config(_)));
    assert!(err.to_string().starts_with("invalid plugin configuration"));
}
