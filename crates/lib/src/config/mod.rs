//! The configuration tree and its dot-path API.
//!
//! [`Config`] owns a root [`Map`] and exposes every operation through
//! dot-paths. Reads, writes and removals go through the
//! [`traverse`](crate::traverse) engine; `merge` goes through the
//! [`merge`](crate::merge) engine.
//!
//! # Usage
//!
//! ```
//! use simpleconfig::{Config, MergeMode, Value};
//!
//! let mut config = Config::new();
//! config.set("database.host", "localhost").set("database.port", 5432);
//!
//! assert_eq!(config.get("database.port")?, Some(&Value::from(5432)));
//! assert!(config.has("database.host"));
//!
//! // Unset keeps the key but nulls its value
//! config.unset("database.host");
//! assert!(!config.has("database.host"));
//! assert_eq!(config.get_or("database.host", "fallback")?, "fallback");
//!
//! let mut overrides = Config::new();
//! overrides.set("database.port", 6432);
//! config.merge(overrides, MergeMode::Replace);
//! assert_eq!(config["database.port"], 6432);
//! # Ok::<(), simpleconfig::Error>(())
//! ```

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use tracing::{debug, trace};

use crate::{
    merge::{self, MergeMode},
    path::Path,
    traverse,
    value::{Key, Map, Value},
};

mod errors;
mod options;
mod snapshot;

pub use errors::ConfigError;
pub use options::{ConfigOptions, PathMode};
pub use snapshot::SNAPSHOT_VERSION;

/// An in-memory configuration tree addressed by dot-paths.
///
/// The root is always a [`Map`]. Nested sections are maps or lists, leaves
/// are scalars or `Null`. A `Null` leaf is structurally present but reads as
/// missing: `has` reports false and `get` reports `None`.
///
/// # Core Operations
///
/// - **Reads**: `get()`, `get_or()`, `get_as()`, `has()`, `split()`
/// - **Writes**: `set()`, `unset()`, `append()`, `subtract()`
/// - **Merging**: `merge()` with a [`MergeMode`]
/// - **Snapshots**: `to_snapshot()`, `from_snapshot()`, `restore()`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    root: Map,
    options: ConfigOptions,
}

impl Config {
    /// Creates an empty config with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty config with the given options
    pub fn with_options(options: ConfigOptions) -> Self {
        Self {
            root: Map::new(),
            options,
        }
    }

    /// Adopts `tree` as the root.
    ///
    /// Maps are taken as-is, `Null` gives an empty config, lists become
    /// index-keyed maps and a lone scalar is stored under key `0`.
    pub fn from_tree(tree: impl Into<Value>) -> Self {
        Self {
            root: Map::from_value(tree.into()),
            options: ConfigOptions::default(),
        }
    }

    /// Replaces the options, keeping the tree
    pub fn set_options(&mut self, options: ConfigOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ConfigOptions {
        self.options
    }

    /// Gets the value at `path`.
    ///
    /// Returns `Ok(None)` when the path is missing or its value is `Null`.
    ///
    /// # Errors
    /// In [`PathMode::Strict`], returns [`ConfigError::NotAContainer`] when a
    /// segment has to be looked up inside a scalar.
    pub fn get(&self, path: impl AsRef<Path>) -> crate::Result<Option<&Value>> {
        let path = path.as_ref();
        let found = traverse::resolve(&self.root, path, self.options.path_mode).inspect_err(|err| {
            debug!(path = %path, error = %err, "Path runs through a scalar");
        })?;
        Ok(found.filter(|value| !value.is_null()))
    }

    /// Gets the value at `path`, or `default` when it is missing or `Null`.
    ///
    /// # Errors
    /// Same as [`Config::get`].
    pub fn get_or(&self, path: impl AsRef<Path>, default: impl Into<Value>) -> crate::Result<Value> {
        Ok(self.get(path)?.cloned().unwrap_or_else(|| default.into()))
    }

    /// Gets the value at `path` converted with `TryFrom`.
    ///
    /// Returns `Ok(None)` if the path is missing or the value has a
    /// different type.
    ///
    /// ```
    /// # use simpleconfig::Config;
    /// let mut config = Config::new();
    /// config.set("server.port", 8080).set("server.name", "edge");
    ///
    /// assert_eq!(config.get_as::<i64>("server.port")?, Some(8080));
    /// assert_eq!(config.get_as::<&str>("server.name")?, Some("edge"));
    /// assert_eq!(config.get_as::<i64>("server.name")?, None);
    /// # Ok::<(), simpleconfig::Error>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> crate::Result<Option<T>>
    where
        T: TryFrom<&'a Value, Error = ConfigError>,
    {
        Ok(self.get(path)?.and_then(|value| T::try_from(value).ok()))
    }

    /// Sets the value at `path`, creating intermediate maps as needed.
    ///
    /// Whatever was at `path` is replaced, and scalars on the way down are
    /// overwritten with maps.
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> &mut Self {
        let path = path.as_ref();
        trace!(path = %path, "Setting value");
        traverse::write(&mut self.root, path, value.into());
        self
    }

    /// Returns true if `path` resolves to a non-null value. Never fails.
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        traverse::exists(&self.root, path.as_ref())
    }

    /// Nulls the value at `path`, keeping its key.
    ///
    /// Does nothing if any segment is missing.
    pub fn unset(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        if traverse::erase(&mut self.root, path).is_some() {
            trace!(path = %path, "Unset value");
        }
        self
    }

    /// Appends `value` to the value at `path`.
    ///
    /// Both sides are wrapped into lists (`Null` as an empty list) and
    /// concatenated. Repeated values are kept. Missing paths are created.
    ///
    /// ```
    /// # use simpleconfig::{Config, Value};
    /// let mut config = Config::new();
    /// config.set("tags", "a").append("tags", "b").append("tags", vec!["b", "c"]);
    /// assert_eq!(config["tags"], Value::from(vec!["a", "b", "b", "c"]));
    /// ```
    pub fn append(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> &mut Self {
        let path = path.as_ref();
        let slot = traverse::slot(&mut self.root, path);
        *slot = merge::append(std::mem::take(slot), value.into());
        trace!(path = %path, "Appended value");
        self
    }

    /// Removes `value` (or each item of a list of values) from the value at
    /// `path`.
    ///
    /// Lists are re-indexed, associative maps keep their keys, and a scalar
    /// equal to one of the values becomes an empty list. Missing paths are
    /// left alone.
    ///
    /// # Errors
    /// In [`PathMode::Strict`], returns [`ConfigError::NotAContainer`] when a
    /// segment has to be looked up inside a scalar.
    pub fn subtract(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> crate::Result<&mut Self> {
        let path = path.as_ref();
        if self.get(path)?.is_none() {
            return Ok(self);
        }
        if let Some(target) = traverse::resolve_mut(&mut self.root, path) {
            *target = merge::subtract(std::mem::take(target), value.into());
            trace!(path = %path, "Subtracted values");
        }
        Ok(self)
    }

    /// Merges another tree into this one.
    ///
    /// `other` may be another `Config`, a [`Map`] or any [`Value`]. The
    /// receiver keeps its own options.
    pub fn merge(&mut self, other: impl Into<Config>, mode: MergeMode) -> &mut Self {
        let other = other.into();
        debug!(
            ?mode,
            base_keys = self.root.len(),
            incoming_keys = other.root.len(),
            "Merging config"
        );
        let base = Value::Map(std::mem::take(&mut self.root));
        self.root = Map::from_value(merge::merge(base, Value::Map(other.root), mode));
        self
    }

    /// Creates a new config rooted at the value found at `path`.
    ///
    /// Missing or null values give an empty config; a non-map value is
    /// wrapped the same way as in [`Config::from_tree`]. The new config
    /// inherits this config's options.
    ///
    /// # Errors
    /// Same as [`Config::get`].
    pub fn split(&self, path: impl AsRef<Path>) -> crate::Result<Config> {
        let tree = self.get(path)?.cloned().unwrap_or_default();
        Ok(Config {
            root: Map::from_value(tree),
            options: self.options,
        })
    }

    /// Returns the root map
    pub fn root(&self) -> &Map {
        &self.root
    }

    /// Returns a copy of the whole tree as a value
    pub fn to_tree(&self) -> Value {
        Value::Map(self.root.clone())
    }

    /// Consumes the config and returns its root map
    pub fn into_tree(self) -> Map {
        self.root
    }

    /// Iterates over the first-level entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.root.iter()
    }

    /// Returns the number of first-level entries
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Counts elements at every depth.
    ///
    /// Each scalar (null included) and each empty container counts as one;
    /// non-empty containers count only through their children. An empty
    /// config counts zero.
    pub fn count(&self) -> usize {
        self.root.values().map(Value::count_leaves).sum()
    }

    /// Encodes the tree as a versioned snapshot string.
    ///
    /// Every snapshot this returns restores to an equal config.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonFiniteFloat`] if the tree holds a NaN or
    /// infinite float, [`ConfigError::SnapshotTooDeep`] if it is nested too
    /// deeply to be restored, and [`Error::Serialize`](crate::Error::Serialize)
    /// if encoding fails.
    pub fn to_snapshot(&self) -> crate::Result<String> {
        snapshot::encode(&self.root)
    }

    /// Restores a config from a snapshot.
    ///
    /// Anything that is not a valid snapshot of a map yields an empty config.
    pub fn from_snapshot(data: &str) -> Self {
        Self {
            root: snapshot::decode(data),
            options: ConfigOptions::default(),
        }
    }

    /// Replaces the whole tree with the one in `data`, keeping the options.
    ///
    /// Falls back to an empty tree the same way as [`Config::from_snapshot`].
    pub fn restore(&mut self, data: &str) -> &mut Self {
        self.root = snapshot::decode(data);
        self
    }

    /// Converts the tree into a `serde_json::Value`
    pub fn to_json(&self) -> serde_json::Value {
        Value::Map(self.root.clone()).to_json()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.to_json_string())
    }
}

impl From<Map> for Config {
    fn from(root: Map) -> Self {
        Self {
            root,
            options: ConfigOptions::default(),
        }
    }
}

impl From<Value> for Config {
    fn from(tree: Value) -> Self {
        Self::from_tree(tree)
    }
}

impl From<serde_json::Value> for Config {
    fn from(tree: serde_json::Value) -> Self {
        Self::from_tree(tree)
    }
}

impl From<Config> for Value {
    fn from(config: Config) -> Self {
        Value::Map(config.root)
    }
}

impl FromIterator<(Key, Value)> for Config {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Map>())
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.root.iter()
    }
}

impl IntoIterator for Config {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.root.into_iter()
    }
}

static NULL: Value = Value::Null;

/// Read access by dot-path.
///
/// Always lenient: missing paths and paths through scalars yield
/// `Value::Null`.
impl<P: AsRef<Path> + ?Sized> Index<&P> for Config {
    type Output = Value;

    fn index(&self, path: &P) -> &Value {
        traverse::resolve(&self.root, path.as_ref(), PathMode::Lenient)
            .ok()
            .flatten()
            .unwrap_or(&NULL)
    }
}

/// Write access by dot-path, creating the path like [`Config::set`].
impl<P: AsRef<Path> + ?Sized> IndexMut<&P> for Config {
    fn index_mut(&mut self, path: &P) -> &mut Value {
        traverse::slot(&mut self.root, path.as_ref())
    }
}
