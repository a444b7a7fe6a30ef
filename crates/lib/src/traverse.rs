//! Dot-path traversal over configuration trees.
//!
//! Every operation walks the tree one segment at a time starting from a root
//! [`Map`]. Maps are entered by key, lists by an in-range numeric segment.
//!
//! - [`resolve`] is read-only and never creates anything.
//! - [`slot`] and [`write`] auto-vivify: missing or non-container values on
//!   the way down are replaced by empty maps.
//! - [`erase`] stops at the first missing segment and otherwise nulls the
//!   leaf in place, keeping its key.
//!
//! A `Null` value part way down a path reads as "not found", never as a
//! malformed path.

use tracing::trace;

use crate::{
    config::{ConfigError, PathMode},
    path::Path,
    value::{Key, Map, Value},
};

/// Resolves `path` against `root`.
///
/// Returns `Ok(None)` if any segment is missing. When a segment has to be
/// looked up inside a non-null scalar, [`PathMode::Strict`] reports
/// [`ConfigError::NotAContainer`] and [`PathMode::Lenient`] reports not found.
///
/// The resolved value itself may be `Null`; callers decide whether that
/// counts as present.
pub fn resolve<'a>(
    root: &'a Map,
    path: &Path,
    mode: PathMode,
) -> Result<Option<&'a Value>, ConfigError> {
    let mut segments = path.segments();
    let Some(mut current) = segments.next().and_then(|first| root.get(&Key::parse(first))) else {
        return Ok(None);
    };

    for segment in segments {
        current = match current {
            Value::Null => return Ok(None),
            Value::Map(_) | Value::List(_) => match current.child(segment) {
                Some(child) => child,
                None => return Ok(None),
            },
            scalar => {
                return match mode {
                    PathMode::Strict => Err(ConfigError::NotAContainer {
                        path: path.to_string(),
                        segment: segment.to_string(),
                        found: scalar.type_name(),
                    }),
                    PathMode::Lenient => Ok(None),
                };
            }
        };
    }

    Ok(Some(current))
}

/// Returns true iff every segment resolves and the final value is not `Null`.
pub fn exists(root: &Map, path: &Path) -> bool {
    matches!(resolve(root, path, PathMode::Lenient), Ok(Some(value)) if !value.is_null())
}

/// Returns the slot addressed by `path`, creating intermediate maps as needed.
///
/// A missing leaf is inserted as `Null`. Any value on the way down that
/// cannot be descended into is replaced: scalars and null by an empty map,
/// lists (when the segment is not an in-range index) by an index-keyed map.
pub fn slot<'a>(root: &'a mut Map, path: &Path) -> &'a mut Value {
    let mut segments = path.segments();
    let first = segments.next().unwrap_or_default();
    let mut current = root.slot(Key::parse(first));

    for segment in segments {
        current = descend_or_create(current, segment);
    }
    current
}

fn descend_or_create<'a>(value: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = match &*value {
        Value::List(items) => Key::parse(segment).as_position().filter(|i| *i < items.len()),
        _ => None,
    };

    match (index, value) {
        (Some(i), Value::List(items)) => &mut items[i],
        (_, value) => {
            if !value.is_container() {
                trace!(segment, found = value.type_name(), "Replacing value with a map to descend");
            }
            value.make_map().slot(Key::parse(segment))
        }
    }
}

/// Sets the value at `path`, replacing whatever was there.
///
/// Returns the previous value (`Null` if the slot was freshly created).
pub fn write(root: &mut Map, path: &Path, value: Value) -> Value {
    std::mem::replace(slot(root, path), value)
}

/// Nulls the value at `path` without removing its key.
///
/// Returns the previous value, or `None` if some segment was missing or
/// already null, in which case the tree is untouched.
pub fn erase(root: &mut Map, path: &Path) -> Option<Value> {
    let target = resolve_mut(root, path)?;
    Some(std::mem::take(target))
}

/// Mutable lookup that treats `Null` anywhere on the path, the leaf
/// included, as missing.
pub(crate) fn resolve_mut<'a>(root: &'a mut Map, path: &Path) -> Option<&'a mut Value> {
    let mut segments = path.segments();
    let mut current = match root.get_mut(&Key::parse(segments.next()?)) {
        Some(value) if !value.is_null() => value,
        _ => return None,
    };

    for segment in segments {
        current = match current.child_mut(segment) {
            Some(value) if !value.is_null() => value,
            _ => return None,
        };
    }
    Some(current)
}
