//!
//! simpleconfig: an in-memory configuration tree addressed by dot-paths.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A tree node. Scalars (null, bool, int, float, text) are leaves; lists and maps are containers.
//! * **Keys (`value::Key`)**: Map keys are either positional indices or names. Canonical integer strings such as `"0"` or `"-3"` always become indices.
//! * **Paths (`path::Path`)**: A dot-separated sequence of keys like `database.primary.host`. Segments are never escaped, so a key containing a dot cannot be addressed.
//! * **Config (`config::Config`)**: The root entity. Owns a root map and offers get, set, has, unset, append, subtract, merge and split by path.
//! * **Merging (`merge::MergeMode`)**: Recursive merge of two trees where associative maps combine key by key and conflicts follow the chosen mode.
//! * **Snapshots**: A versioned JSON encoding of the whole tree that restores it exactly, key kinds and order included.
//!
//! ## Example
//!
//! ```
//! use simpleconfig::{Config, MergeMode, path};
//!
//! let mut config = Config::new();
//! config
//!     .set(path!("server", "host"), "localhost")
//!     .set("server.ports", vec![80, 443])
//!     .append("server.ports", 8080);
//!
//! assert_eq!(config.count(), 4);
//! assert!(config.has("server.ports.2"));
//!
//! let defaults = Config::from(serde_json::json!({"server": {"host": "0.0.0.0", "tls": true}}));
//! config.merge(defaults, MergeMode::Keep);
//! assert_eq!(config["server.host"], "localhost");
//! assert_eq!(config["server.tls"], true);
//! ```

pub mod config;
pub mod merge;
pub mod path;
pub mod traverse;
pub mod value;

/// Re-export the main types for easier access.
pub use config::{Config, ConfigError, ConfigOptions, PathMode, SNAPSHOT_VERSION};
pub use merge::MergeMode;
pub use path::{Path, PathBuf};
pub use value::{Key, Map, Value};

/// Result type used throughout the simpleconfig library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the simpleconfig library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the config module
    #[error(transparent)]
    Config(ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error was raised by strict path traversal.
    pub fn is_path_error(&self) -> bool {
        match self {
            Error::Config(config_err) => config_err.is_path_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Config(config_err) => config_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from writing or reading a snapshot.
    pub fn is_snapshot_error(&self) -> bool {
        match self {
            Error::Config(config_err) => config_err.is_snapshot_error(),
            Error::Serialize(_) => true,
        }
    }

    /// Get the offending path, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Config(config_err) => config_err.path(),
            _ => None,
        }
    }
}
