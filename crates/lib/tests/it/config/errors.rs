//! Tests for strict and lenient path handling

use serde_json::json;
use simpleconfig::{Config, ConfigError, ConfigOptions, Error, PathMode};

use crate::helpers::*;

fn lenient(tree: serde_json::Value) -> Config {
    let mut config = config_from(tree);
    config.set_options(ConfigOptions::default().with_path_mode(PathMode::Lenient));
    config
}

#[test]
fn test_strict_is_default() {
    assert_eq!(Config::new().options().path_mode, PathMode::Strict);
}

#[test]
fn test_strict_get_reports_scalar_segment() {
    let config = nested_config();
    let err = config.get("aaa.bbb.ccc.ddd").unwrap_err();

    match &err {
        Error::Config(ConfigError::NotAContainer {
            path,
            segment,
            found,
        }) => {
            assert_eq!(path, "aaa.bbb.ccc.ddd");
            assert_eq!(segment, "ddd");
            assert_eq!(*found, "text");
        }
        other => panic!("Expected NotAContainer, got: {other:?}"),
    }
    assert!(err.is_path_error());
    assert!(!err.is_type_error());
    assert!(err.to_string().contains("aaa.bbb.ccc.ddd"));
}

#[test]
fn test_strict_errors_on_every_reading_operation() {
    let mut config = config_from(json!({"port": 80}));

    assert!(config.get("port.number").is_err());
    assert!(config.get_or("port.number", 1).is_err());
    assert!(config.get_as::<i64>("port.number").is_err());
    assert!(config.split("port.number").is_err());
    assert!(config.subtract("port.number", 80).is_err());
}

#[test]
fn test_strict_error_leaves_tree_untouched() {
    let mut config = config_from(json!({"port": 80}));
    let _ = config.subtract("port.number", 80);
    assert_tree(&config, json!({"port": 80}));
}

#[test]
fn test_missing_key_is_not_an_error() {
    let config = nested_config();
    assert_eq!(config.get("aaa.zzz.yyy").unwrap(), None);
    assert_eq!(config.get("zzz").unwrap(), None);
}

#[test]
fn test_null_mid_path_is_not_an_error() {
    let config = config_from(json!({"aaa": null}));
    assert_eq!(config.get("aaa.bbb").unwrap(), None);
}

#[test]
fn test_lenient_reads_report_not_found() {
    let mut config = lenient(json!({"port": 80}));

    assert_eq!(config.get("port.number").unwrap(), None);
    assert_eq!(config.get_or("port.number", 1).unwrap(), 1);
    assert_eq!(config.get_as::<i64>("port.number").unwrap(), None);
    assert!(config.split("port.number").unwrap().is_empty());

    config.subtract("port.number", 80).unwrap();
    assert_tree(&config, json!({"port": 80}));
}

#[test]
fn test_infallible_operations_ignore_mode() {
    let mut config = config_from(json!({"port": 80}));

    assert!(!config.has("port.number"));
    config.unset("port.number");
    assert_tree(&config, json!({"port": 80}));

    config.append("port.number", 1);
    assert_tree(&config, json!({"port": {"number": [1]}}));
}

#[test]
fn test_type_mismatch_from_conversion() {
    let config = config_from(json!({"name": "x"}));
    let value = config.get("name").unwrap().unwrap();
    let err = i64::try_from(value).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(
        err,
        ConfigError::TypeMismatch {
            expected: "int",
            actual: "text"
        }
    );
}
