//! Tests for set, get, has, unset, append, subtract and split

use serde_json::json;
use simpleconfig::{Config, Value};

use crate::helpers::*;

// ===== SET =====

#[test]
fn test_set_creates_nested_path() {
    let mut config = Config::new();
    config.set("aaa.bbb.ccc", "value");
    assert_tree(&config, json!({"aaa": {"bbb": {"ccc": "value"}}}));
}

#[test]
fn test_set_stores_falsy_and_empty_values() {
    let cases = [
        (Value::Null, json!(null)),
        (Value::from(false), json!(false)),
        (Value::List(vec![]), json!([])),
    ];

    for (value, expected) in cases {
        let mut config = Config::new();
        config.set("aaa.bbb.ccc", value);
        assert_tree(&config, json!({"aaa": {"bbb": {"ccc": expected}}}));
    }
}

#[test]
fn test_set_then_get_returns_value() {
    let values = [
        Value::from("text"),
        Value::from(0),
        Value::from(1.5),
        Value::from(true),
        Value::from(vec![1, 2]),
        Value::from(json!({"nested": {"deep": 1}})),
    ];

    for value in values {
        let mut config = nested_config();
        config.set("aaa.bbb.ccc", value.clone());
        assert_eq!(config.get("aaa.bbb.ccc").unwrap(), Some(&value));
    }
}

#[test]
fn test_set_replaces_subtree_without_merging() {
    let mut config = config_from(json!({"aaa": {"bbb": {"ccc": 1, "ddd": 2}}}));
    config.set("aaa.bbb", json!({"eee": 3}));
    assert_tree(&config, json!({"aaa": {"bbb": {"eee": 3}}}));
}

#[test]
fn test_set_overwrites_scalar_mid_path() {
    let mut config = config_from(json!({"aaa": "flat"}));
    config.set("aaa.bbb", 1);
    assert_tree(&config, json!({"aaa": {"bbb": 1}}));
}

#[test]
fn test_set_empty_segments_are_literal_keys() {
    let mut config = Config::new();
    config.set("aaa.", 1).set(".bbb", 2);
    assert_tree(&config, json!({"aaa": {"": 1}, "": {"bbb": 2}}));
    assert_eq!(config.get("aaa.").unwrap(), Some(&Value::from(1)));
}

#[test]
fn test_set_into_list_by_index() {
    let mut config = config_from(json!({"list": ["a", "b"]}));
    config.set("list.1", "B");
    assert_tree(&config, json!({"list": ["a", "B"]}));

    // Out of range turns the list into an index-keyed map
    config.set("list.5", "F");
    assert_tree(&config, json!({"list": {"0": "a", "1": "B", "5": "F"}}));
}

#[test]
fn test_set_chains() {
    let mut config = Config::new();
    config.set("a", 1).set("b", 2).unset("a");
    assert_tree(&config, json!({"a": null, "b": 2}));
}

// ===== GET =====

#[test]
fn test_get_at_every_depth() {
    let config = nested_config();
    assert_eq!(config.get("aaa.bbb.ccc").unwrap(), Some(&Value::from("value")));
    assert_eq!(
        config.get("aaa.bbb").unwrap().map(Value::to_json),
        Some(json!({"ccc": "value"}))
    );
    assert_eq!(
        config.get("aaa").unwrap().map(Value::to_json),
        Some(json!({"bbb": {"ccc": "value"}}))
    );
}

#[test]
fn test_get_or_falls_back_to_default() {
    let config = nested_config();
    assert_eq!(config.get_or("aaa.bbb.ccc", "default").unwrap(), "value");
    assert_eq!(config.get_or("aaa.", "default").unwrap(), "default");
    assert_eq!(config.get_or("aaa.bbb.ddd", "default").unwrap(), "default");
    assert_eq!(config.get_or("aaa.ddd", Value::Null).unwrap(), Value::Null);
}

#[test]
fn test_get_as_typed() {
    let mut config = Config::new();
    config
        .set("name", "simple")
        .set("port", 8080)
        .set("ratio", 0.5)
        .set("enabled", true);

    assert_eq!(config.get_as::<String>("name").unwrap(), Some("simple".to_string()));
    assert_eq!(config.get_as::<i64>("port").unwrap(), Some(8080));
    assert_eq!(config.get_as::<f64>("ratio").unwrap(), Some(0.5));
    assert_eq!(config.get_as::<bool>("enabled").unwrap(), Some(true));
    assert_eq!(config.get_as::<bool>("name").unwrap(), None);
    assert_eq!(config.get_as::<i64>("missing").unwrap(), None);
}

#[test]
fn test_get_with_integer_segments() {
    let config = mixed_config();
    assert_eq!(config.get("0").unwrap(), Some(&Value::from("something")));
    assert_eq!(config.get("1").unwrap(), Some(&Value::from(42)));
    assert_eq!(config.get("ddd.2").unwrap(), Some(&Value::from("zz")));
    assert_eq!(config.get("ddd.3").unwrap(), None);
    assert_eq!(config.get("ddd.01").unwrap(), None);
}

// ===== HAS =====

#[test]
fn test_has() {
    let config = nested_config();
    assert!(config.has("aaa.bbb.ccc"));
    assert!(config.has("aaa.bbb"));
    assert!(config.has("aaa"));
    assert!(!config.has("aaa."));
    assert!(!config.has("aaa.bbb.ddd"));
    assert!(!config.has("aaa.ddd"));
}

#[test]
fn test_has_is_false_for_null_and_true_for_falsy() {
    let mixed = mixed_config();
    assert!(!mixed.has("ggg"));
    assert!(mixed.has("fff"));

    let mut config = Config::new();
    config.set("zero", 0).set("empty", "").set("none", Value::List(vec![]));
    assert!(config.has("zero"));
    assert!(config.has("empty"));
    assert!(config.has("none"));
}

#[test]
fn test_has_never_fails_through_scalar() {
    let config = config_from(json!({"flat": "text"}));
    assert!(!config.has("flat.deeper.still"));
}

// ===== UNSET =====

#[test]
fn test_unset_keeps_key_with_null() {
    let cases = [
        (json!({"aaa": {"bbb": {"ccc": "value"}}}), "aaa.bbb.ccc", json!({"aaa": {"bbb": {"ccc": null}}})),
        (
            json!({"aaa": {"bbb": {"ccc": ["value", "another value"]}}}),
            "aaa.bbb.ccc",
            json!({"aaa": {"bbb": {"ccc": null}}}),
        ),
        (json!({"aaa": {"bbb": {"ccc": "value"}}}), "aaa.bbb", json!({"aaa": {"bbb": null}})),
        (json!({"aaa": {"bbb": {"ccc": "value"}}}), "aaa", json!({"aaa": null})),
    ];

    for (tree, path, expected) in cases {
        let mut config = config_from(tree);
        config.unset(path);
        assert_tree(&config, expected);
    }
}

#[test]
fn test_unset_missing_path_is_noop() {
    let mut config = nested_config();
    config.unset("aaa.bbb.ddd").unset("xxx.yyy").unset("aaa.bbb.ccc.ddd");
    assert_tree(&config, json!({"aaa": {"bbb": {"ccc": "value"}}}));
}

#[test]
fn test_unset_then_get_returns_default() {
    let mut config = nested_config();
    config.unset("aaa.bbb.ccc");
    assert!(!config.has("aaa.bbb.ccc"));
    assert_eq!(config.get("aaa.bbb.ccc").unwrap(), None);
    assert_eq!(config.get_or("aaa.bbb.ccc", "default").unwrap(), "default");
}

#[test]
fn test_unset_is_idempotent() {
    let mut once = nested_config();
    once.unset("aaa.bbb");

    let mut twice = nested_config();
    twice.unset("aaa.bbb").unset("aaa.bbb");

    assert_eq!(once.to_json(), twice.to_json());
    assert_tree(&twice, json!({"aaa": {"bbb": null}}));
}

// ===== APPEND =====

#[test]
fn test_append_cases() {
    let cases = [
        (
            json!({"aaa": {"bbb": {"ccc": ["value"]}}}),
            "aaa.bbb.ccc",
            json!("another value"),
            json!({"aaa": {"bbb": {"ccc": ["value", "another value"]}}}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": ["value"]}}}),
            "aaa.bbb.ccc",
            json!(["another value", "new value"]),
            json!({"aaa": {"bbb": {"ccc": ["value", "another value", "new value"]}}}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": "value"}}}),
            "ddd",
            json!("another value"),
            json!({"aaa": {"bbb": {"ccc": "value"}}, "ddd": ["another value"]}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": ["value"]}}}),
            "aaa.ddd",
            json!("another value"),
            json!({"aaa": {"bbb": {"ccc": ["value"]}, "ddd": ["another value"]}}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": "value"}}}),
            "aaa.bbb.ccc",
            json!("another value"),
            json!({"aaa": {"bbb": {"ccc": ["value", "another value"]}}}),
        ),
    ];

    for (tree, path, value, expected) in cases {
        let mut config = config_from(tree);
        config.append(path, value);
        assert_tree(&config, expected);
    }
}

#[test]
fn test_append_keeps_duplicates() {
    let mut config = Config::new();
    config.append("tags", "a").append("tags", "a");
    assert_tree(&config, json!({"tags": ["a", "a"]}));
}

#[test]
fn test_append_to_associative_map() {
    let mut config = config_from(json!({"section": {"name": "x"}}));
    config.append("section", "extra");
    assert_tree(&config, json!({"section": {"name": "x", "0": "extra"}}));
}

// ===== SUBTRACT =====

#[test]
fn test_subtract_cases() {
    let cases = [
        (
            json!({"aaa": {"bbb": {"ccc": ["value", "another value"]}}}),
            "aaa.bbb.ccc",
            json!({"aaa": {"bbb": {"ccc": ["another value"]}}}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": ["value"]}}}),
            "aaa.bbb.ccc",
            json!({"aaa": {"bbb": {"ccc": []}}}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": "value"}}}),
            "aaa.bbb.ccc",
            json!({"aaa": {"bbb": {"ccc": []}}}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": []}}}),
            "aaa.bbb.ccc",
            json!({"aaa": {"bbb": {"ccc": []}}}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": "value"}}}),
            "aaa.bbb.ddd",
            json!({"aaa": {"bbb": {"ccc": "value"}}}),
        ),
        (
            json!({"aaa": {"bbb": {"ccc": "value", "ddd": "another value"}}}),
            "aaa.bbb",
            json!({"aaa": {"bbb": {"ddd": "another value"}}}),
        ),
    ];

    for (tree, path, expected) in cases {
        let mut config = config_from(tree);
        config.subtract(path, "value").unwrap();
        assert_tree(&config, expected);
    }
}

#[test]
fn test_subtract_missing_value_leaves_list() {
    let mut config = config_from(json!({"aaa": {"bbb": {"ccc": ["value", "another value"]}}}));
    config.subtract("aaa.bbb.ccc", "non-existent value").unwrap();
    assert_tree(&config, json!({"aaa": {"bbb": {"ccc": ["value", "another value"]}}}));
}

#[test]
fn test_subtract_reindexes_list() {
    let mut config = config_from(json!({"a": {"b": ["v", "w"]}}));
    config.subtract("a.b", "v").unwrap();
    assert_tree(&config, json!({"a": {"b": ["w"]}}));
    assert_eq!(config["a.b.0"], "w");
}

#[test]
fn test_subtract_many_values() {
    let mut config = config_from(json!({"list": [1, 2, 3, 2, 4]}));
    config.subtract("list", vec![2, 4]).unwrap();
    assert_tree(&config, json!({"list": [1, 3]}));
}

#[test]
fn test_subtract_unequal_scalar_is_unchanged() {
    let mut config = config_from(json!({"flat": "keep me"}));
    config.subtract("flat", "value").unwrap();
    assert_tree(&config, json!({"flat": "keep me"}));
}

// ===== SPLIT =====

#[test]
fn test_split_on_empty_config() {
    let config = Config::from(Value::Null);
    assert!(config.split("any").unwrap().is_empty());
    assert!(config.split("multiple.level.key").unwrap().is_empty());
}

#[test]
fn test_split_sections() {
    let config = two_section_config();

    let aaa = config.split("aaa").unwrap();
    assert_tree(&aaa, json!({"bbb": {"ccc": "value"}}));

    let missing = config.split("eee").unwrap();
    assert!(missing.is_empty());

    let eee = config.split("ddd.eee").unwrap();
    assert_tree(&eee, json!({"fff": "another value"}));
    assert_eq!(eee, config_from(json!({"fff": "another value"})));
}

#[test]
fn test_split_is_independent_copy() {
    let mut config = two_section_config();
    let mut part = config.split("aaa").unwrap();

    part.set("bbb.ccc", "changed");
    config.set("aaa.bbb.zzz", 1);

    assert_tree(&part, json!({"bbb": {"ccc": "changed"}}));
    assert_eq!(config["aaa.bbb.ccc"], "value");
}
