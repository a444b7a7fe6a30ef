use serde_json::json;
use simpleconfig::{Config, Map, MergeMode, Value};

/// All merge modes, for properties that must hold in every mode
pub const ALL_MODES: [MergeMode; 3] = [MergeMode::Replace, MergeMode::Keep, MergeMode::Append];

/// Create a config from a JSON literal
pub fn config_from(tree: serde_json::Value) -> Config {
    Config::from(tree)
}

/// The three-level tree most scenarios start from
pub fn nested_config() -> Config {
    config_from(json!({"aaa": {"bbb": {"ccc": "value"}}}))
}

/// Two disjoint sections, used by split and merge tests
pub fn two_section_config() -> Config {
    config_from(json!({
        "aaa": {"bbb": {"ccc": "value"}},
        "ddd": {"eee": {"fff": "another value"}}
    }))
}

/// A root mixing named and positional keys with every scalar kind
///
/// Keys in order: `aaa`, `0`, `ddd`, `eee`, `fff`, `ggg`, `1`.
pub fn mixed_config() -> Config {
    let mut root = Map::new();
    root.insert("aaa", Value::from(json!({"bbb": {"ccc": "value"}})));
    root.insert(0, "something");
    root.insert("ddd", vec!["xxx", "yyy", "zz"]);
    root.insert("eee", -8);
    root.insert("fff", false);
    root.insert("ggg", Value::Null);
    root.insert(1, 42);
    Config::from(root)
}

/// Assert that a config holds exactly the given JSON tree
#[track_caller]
pub fn assert_tree(config: &Config, expected: serde_json::Value) {
    assert_eq!(config.to_json(), expected, "unexpected tree: {config}");
}
