//! Container-shape helpers shared by the merge engine and the
//! `append`/`subtract` operations.
//!
//! Both lists and maps are flattened into an ordered run of `(Key, Value)`
//! entries, combined, and rebuilt. A run whose keys are all positional is
//! rebuilt as a list, anything else as a map.

use super::{Key, Map, Value};

type Entries = Vec<(Key, Value)>;

/// Flattens a value into entries. `Null` contributes nothing, a scalar
/// contributes a single positional entry.
pub(crate) fn wrap(value: Value) -> Entries {
    match value {
        Value::Null => Vec::new(),
        Value::List(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, value)| (Key::from(i), value))
            .collect(),
        Value::Map(map) => map.into_iter().collect(),
        scalar => vec![(Key::Index(0), scalar)],
    }
}

/// Rebuilds a value from entries, renumbering positional keys from zero.
pub(crate) fn rebuild(entries: Entries) -> Value {
    if entries.iter().all(|(key, _)| key.is_index()) {
        return Value::List(entries.into_iter().map(|(_, value)| value).collect());
    }

    let mut next = 0i64;
    let map: Map = entries
        .into_iter()
        .map(|(key, value)| match key {
            Key::Index(_) => {
                let key = Key::Index(next);
                next += 1;
                (key, value)
            }
            named => (named, value),
        })
        .collect();
    Value::Map(map)
}

/// Concatenates two values.
///
/// Positional entries of both sides are kept in order. A name present on
/// both sides stays where the left side put it and takes the right-hand value.
pub(crate) fn concat(left: Value, right: Value) -> Value {
    rebuild(concat_entries(wrap(left), wrap(right)))
}

fn concat_entries(left: Entries, right: Entries) -> Entries {
    let mut combined = left;
    for (key, value) in right {
        match key {
            Key::Name(_) => match combined.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, slot)) => *slot = value,
                None => combined.push((key, value)),
            },
            index => combined.push((index, value)),
        }
    }
    combined
}

/// Concatenates two values and drops repeated values, keeping the first
/// occurrence of each.
pub(crate) fn concat_unique(left: Value, right: Value) -> Value {
    let combined = concat_entries(wrap(left), wrap(right));

    let mut unique: Entries = Vec::with_capacity(combined.len());
    for (key, value) in combined {
        if !unique.iter().any(|(_, seen)| *seen == value) {
            unique.push((key, value));
        }
    }
    rebuild(unique)
}

/// Removes every entry of `target` whose value equals one of `removals`.
///
/// Associative maps keep their keys; every other container is re-indexed
/// into a list. A scalar equal to a removal value becomes an empty list and
/// anything else is returned unchanged.
pub(crate) fn difference(target: Value, removals: &[Value]) -> Value {
    match target {
        Value::Map(map) if map.is_associative() => Value::Map(
            map.into_iter()
                .filter(|(_, value)| !removals.contains(value))
                .collect(),
        ),
        Value::Map(map) => Value::List(
            map.into_iter()
                .map(|(_, value)| value)
                .filter(|value| !removals.contains(value))
                .collect(),
        ),
        Value::List(items) => Value::List(
            items
                .into_iter()
                .filter(|value| !removals.contains(value))
                .collect(),
        ),
        Value::Null => Value::Null,
        scalar if removals.contains(&scalar) => Value::List(Vec::new()),
        scalar => scalar,
    }
}
