//! Recursive merging of configuration trees.
//!
//! [`merge`] walks two trees in lock-step. Where both sides are associative
//! maps it recurses key by key; anywhere else the two values cannot be
//! combined structurally and the active [`MergeMode`] decides the outcome:
//!
//! | Mode      | Shape conflict                                  |
//! |-----------|-------------------------------------------------|
//! | `Replace` | incoming value wins                             |
//! | `Keep`    | base value wins                                 |
//! | `Append`  | both values concatenated, repeated values dropped |
//!
//! An incoming value with nothing to contribute (null, empty list, empty
//! map) never changes the base.
//!
//! # Example
//!
//! ```
//! use simpleconfig::{Value, merge::{MergeMode, merge}};
//!
//! let base = Value::from(serde_json::json!({"server": {"port": 80, "tags": ["a"]}}));
//! let incoming = Value::from(serde_json::json!({"server": {"port": 8080, "tags": ["b"]}}));
//!
//! let replaced = merge(base.clone(), incoming.clone(), MergeMode::Replace);
//! assert_eq!(replaced.to_json(), serde_json::json!({"server": {"port": 8080, "tags": ["b"]}}));
//!
//! let kept = merge(base.clone(), incoming.clone(), MergeMode::Keep);
//! assert_eq!(kept.to_json(), serde_json::json!({"server": {"port": 80, "tags": ["a"]}}));
//!
//! let appended = merge(base, incoming, MergeMode::Append);
//! assert_eq!(appended.to_json(), serde_json::json!({"server": {"port": [80, 8080], "tags": ["a", "b"]}}));
//! ```

use tracing::trace;

use crate::value::{Map, Value, shape};

/// Conflict policy for [`merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeMode {
    /// Incoming values win on conflict.
    #[default]
    Replace,
    /// Existing values win on conflict.
    Keep,
    /// Conflicting values are concatenated into a list without repeats.
    Append,
}

/// Merges `incoming` into `base` and returns the combined tree.
///
/// `Keep` is `Replace` with the operands swapped: the roles are exchanged
/// once at the top and the recursion then runs unchanged.
pub fn merge(base: Value, incoming: Value, mode: MergeMode) -> Value {
    let (base, incoming) = match mode {
        MergeMode::Keep => (incoming, base),
        MergeMode::Replace | MergeMode::Append => (base, incoming),
    };
    merge_values(base, incoming, mode)
}

fn merge_values(base: Value, incoming: Value, mode: MergeMode) -> Value {
    if incoming.is_vacant() {
        return base;
    }

    match (base, incoming) {
        (Value::Map(base), Value::Map(incoming))
            if base.is_associative() && incoming.is_associative() =>
        {
            Value::Map(merge_maps(base, incoming, mode))
        }
        (base, incoming) => match mode {
            MergeMode::Append => {
                trace!(
                    base = base.type_name(),
                    incoming = incoming.type_name(),
                    "Appending conflicting values"
                );
                shape::concat_unique(base, incoming)
            }
            MergeMode::Replace | MergeMode::Keep => incoming,
        },
    }
}

/// Key-wise merge of two associative maps.
///
/// Shared keys take the recursively merged value in the base's position,
/// keys only in `base` are untouched, and keys only in `incoming` are
/// appended in incoming order.
fn merge_maps(mut base: Map, incoming: Map, mode: MergeMode) -> Map {
    for (key, incoming_value) in incoming {
        match base.get_mut(&key) {
            Some(base_value) => {
                let merged = merge_values(std::mem::take(base_value), incoming_value, mode);
                *base_value = merged;
            }
            None => {
                base.insert(key, incoming_value);
            }
        }
    }
    base
}

/// Concatenates `incoming` onto `current`, keeping repeated values.
///
/// This is the single-path `append` rule; unlike [`MergeMode::Append`] it
/// does not remove duplicates.
pub fn append(current: Value, incoming: Value) -> Value {
    shape::concat(current, incoming)
}

/// Removes `removals` from `current`.
///
/// `removals` is wrapped into a list first (`Null` removes nothing). Lists
/// and positional maps are re-indexed after removal, associative maps keep
/// their keys, and a scalar equal to one of the removal values becomes an
/// empty list.
pub fn subtract(current: Value, removals: Value) -> Value {
    let removals: Vec<Value> = shape::wrap(removals)
        .into_iter()
        .map(|(_, value)| value)
        .collect();
    shape::difference(current, &removals)
}
