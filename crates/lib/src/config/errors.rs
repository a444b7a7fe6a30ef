//! Error types for configuration operations.

use thiserror::Error;

/// Structured error types for configuration operations.
///
/// A plain missing key is never an error; reads report it as `None` and
/// mutations treat it as a no-op or create the path. Errors are reserved for
/// paths that are malformed with respect to the tree they are applied to,
/// and for trees or payloads that cannot go through a snapshot.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Strict traversal needed a container but found a scalar
    #[error("Config does not have key `{path}` set: `{segment}` cannot be looked up in a {found} value")]
    NotAContainer {
        path: String,
        segment: String,
        found: &'static str,
    },

    /// A value could not be converted to the requested type
    #[error("Config type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A snapshot was written by an incompatible encoder
    #[error("Unsupported snapshot version {version}; only version {supported} is supported")]
    UnsupportedVersion { version: u8, supported: u8 },

    /// The tree is nested too deeply to be restored from a snapshot
    #[error("Config is too deep to snapshot: encoding nests {nesting} levels, at most {max} can be restored")]
    SnapshotTooDeep { nesting: usize, max: usize },

    /// A float with no JSON representation (NaN or infinite)
    #[error("Config value at `{path}` is a non-finite float and cannot be snapshotted")]
    NonFiniteFloat { path: String },
}

impl ConfigError {
    /// Check if this error was raised by strict path traversal
    pub fn is_path_error(&self) -> bool {
        matches!(self, ConfigError::NotAContainer { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, ConfigError::TypeMismatch { .. })
    }

    /// Check if this error is related to snapshot decoding
    pub fn is_snapshot_error(&self) -> bool {
        matches!(
            self,
            ConfigError::UnsupportedVersion { .. }
                | ConfigError::SnapshotTooDeep { .. }
                | ConfigError::NonFiniteFloat { .. }
        )
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            ConfigError::NotAContainer { path, .. } | ConfigError::NonFiniteFloat { path } => Some(path),
            _ => None,
        }
    }
}

// Conversion from ConfigError to the main Error type
impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}
