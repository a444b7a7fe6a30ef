//! Versioned snapshot encoding of configuration trees.
//!
//! A snapshot is a JSON document of the form `{"_v": 1, "root": ...}`.
//! Values use serde's externally tagged enum encoding (`{"Text": "x"}`,
//! `{"Int": 3}`, `{"Map": [...]}`) and maps are written as ordered lists of
//! `[key, value]` pairs, so positional keys and insertion order survive a
//! round trip exactly.
//!
//! Encoding refuses trees that could not be read back: non-finite floats
//! have no JSON form, and serde_json stops parsing at a fixed nesting depth.

use tracing::warn;

use super::ConfigError;
use crate::value::{Map, Value};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Deepest JSON nesting a snapshot may use. serde_json rejects documents
/// nested 128 levels deep.
const MAX_NESTING: usize = 124;

#[derive(serde::Serialize)]
struct SnapshotRef<'a> {
    #[serde(rename = "_v")]
    version: u8,
    root: RootRef<'a>,
}

/// Borrowed root, tagged the same way as [`Value::Map`].
#[derive(serde::Serialize)]
enum RootRef<'a> {
    Map(&'a Map),
}

#[derive(serde::Deserialize)]
struct Snapshot {
    #[serde(rename = "_v")]
    version: u8,
    root: Value,
}

/// Encodes a tree as a snapshot string.
///
/// # Errors
/// [`ConfigError::NonFiniteFloat`] or [`ConfigError::SnapshotTooDeep`] when
/// the snapshot could not be restored.
pub(crate) fn encode(root: &Map) -> crate::Result<String> {
    check_encodable(root)?;
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        root: RootRef::Map(root),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Decodes a snapshot, reporting why it could not be used.
///
/// A well-formed snapshot whose root is not a map decodes to `Ok(None)`.
pub(crate) fn try_decode(data: &str) -> crate::Result<Option<Map>> {
    let snapshot: Snapshot = serde_json::from_str(data)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            version: snapshot.version,
            supported: SNAPSHOT_VERSION,
        }
        .into());
    }

    match snapshot.root {
        Value::Map(map) => Ok(Some(map)),
        _ => Ok(None),
    }
}

/// Decodes a snapshot, falling back to an empty tree for anything that is
/// not a valid snapshot of a map.
pub(crate) fn decode(data: &str) -> Map {
    match try_decode(data) {
        Ok(Some(map)) => map,
        Ok(None) => {
            warn!("Snapshot root is not a map, restoring an empty config");
            Map::new()
        }
        Err(err) => {
            warn!(error = %err, "Unreadable snapshot, restoring an empty config");
            Map::new()
        }
    }
}

fn check_encodable(root: &Map) -> Result<(), ConfigError> {
    let mut path = Vec::new();
    // The envelope object wraps the root
    let nesting = 1 + map_nesting(root, &mut path)?;
    if nesting > MAX_NESTING {
        return Err(ConfigError::SnapshotTooDeep {
            nesting,
            max: MAX_NESTING,
        });
    }
    Ok(())
}

/// JSON levels used by `{"Map": [[key, value], ...]}`, children included.
fn map_nesting(map: &Map, path: &mut Vec<String>) -> Result<usize, ConfigError> {
    // Key objects sit one level inside the pair
    let mut deepest = 1;
    for (key, value) in map {
        path.push(key.to_string());
        deepest = deepest.max(value_nesting(value, path)?);
        path.pop();
    }
    Ok(3 + deepest)
}

fn value_nesting(value: &Value, path: &mut Vec<String>) -> Result<usize, ConfigError> {
    match value {
        Value::Null => Ok(0),
        Value::Float(n) if !n.is_finite() => Err(ConfigError::NonFiniteFloat {
            path: path.join("."),
        }),
        Value::Map(map) => map_nesting(map, path),
        Value::List(items) => {
            let mut deepest = 0;
            for (i, item) in items.iter().enumerate() {
                path.push(i.to_string());
                deepest = deepest.max(value_nesting(item, path)?);
                path.pop();
            }
            Ok(2 + deepest)
        }
        _ => Ok(1),
    }
}
