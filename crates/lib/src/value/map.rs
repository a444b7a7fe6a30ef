//! Ordered mapping container for configuration trees.

use std::fmt;

use indexmap::IndexMap;

use super::{Key, Value};

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// `Map` is the only container that may sit at the root of a
/// [`Config`](crate::Config). Keys keep the order in which they were first
/// inserted; overwriting a key keeps its position.
///
/// # Shape
///
/// A map is *associative* when it is non-empty and every key is a
/// [`Key::Name`]. Everything else (empty maps, maps with at least one
/// positional key) is treated positionally by the merge, append and
/// subtract algorithms.
///
/// ```
/// # use simpleconfig::value::{Map, Value};
/// let mut map = Map::new();
/// assert!(!map.is_associative());
///
/// map.insert("name", "Alice");
/// assert!(map.is_associative());
///
/// map.insert(0, "positional");
/// assert!(!map.is_associative());
/// ```
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<(Key, Value)>", into = "Vec<(Key, Value)>")]
pub struct Map {
    entries: IndexMap<Key, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of entries at this level
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map is non-empty and every key is a name.
    pub fn is_associative(&self) -> bool {
        !self.entries.is_empty() && self.entries.keys().all(Key::is_name)
    }

    /// Returns true if the keys are exactly `0..len` in order.
    pub fn is_dense(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_index() == Some(i as i64))
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a value, returning the previous value for that key.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a key entirely, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns the slot for `key`, inserting `Null` if it is missing.
    pub fn slot(&mut self, key: Key) -> &mut Value {
        self.entries.entry(key).or_insert(Value::Null)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Builds an index-keyed map from list items.
    pub fn from_items(items: Vec<Value>) -> Self {
        items
            .into_iter()
            .enumerate()
            .map(|(i, value)| (Key::from(i), value))
            .collect()
    }

    /// Adopts any value as a map.
    ///
    /// Maps are returned as-is, `Null` becomes an empty map, lists become
    /// index-keyed maps and any other scalar becomes `{0: scalar}`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Map(map) => map,
            Value::Null => Map::new(),
            Value::List(items) => Map::from_items(items),
            scalar => {
                let mut map = Map::new();
                map.insert(0, scalar);
                map
            }
        }
    }

    /// Converts to a JSON-like string representation for human-readable output.
    pub fn to_json_string(&self) -> String {
        let mut result = String::with_capacity(self.entries.len() * 16);
        result.push('{');
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                result.push(',');
            }
            result.push_str(&format!("\"{}\":{}", escape(&key.to_string()), value.to_json_string()));
        }
        result.push('}');
        result
    }
}

pub(crate) fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(Key, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Key, Value)> for Map {
    fn extend<T: IntoIterator<Item = (Key, Value)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Snapshot encoding keeps keys typed and ordered as a list of pairs.
// Names that spell an integer are folded into indices on the way in.
impl From<Vec<(Key, Value)>> for Map {
    fn from(entries: Vec<(Key, Value)>) -> Self {
        entries
            .into_iter()
            .map(|(key, value)| (key.canonicalize(), value))
            .collect()
    }
}

impl From<Map> for Vec<(Key, Value)> {
    fn from(map: Map) -> Self {
        map.entries.into_iter().collect()
    }
}
