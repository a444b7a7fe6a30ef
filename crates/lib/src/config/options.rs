//! Behavioural options for [`Config`](super::Config).

/// How reads react to a path that runs through a scalar.
///
/// With `{"name": "flat"}`, the path `name.first` asks for a child of a
/// text value. A missing key is "not found" in both modes; this only
/// decides about keys that cannot exist because their parent is a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathMode {
    /// Report [`ConfigError::NotAContainer`](super::ConfigError::NotAContainer).
    #[default]
    Strict,
    /// Report the key as not found.
    Lenient,
}

/// Options carried by a [`Config`](super::Config).
///
/// ```
/// # use simpleconfig::{Config, ConfigOptions, PathMode};
/// let config = Config::with_options(ConfigOptions::default().with_path_mode(PathMode::Lenient));
/// assert_eq!(config.options().path_mode, PathMode::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigOptions {
    /// Applies to `get`, `get_or`, `get_as`, `split` and `subtract`.
    /// `has`, `set`, `unset`, `append` and indexing never fail.
    pub path_mode: PathMode,
}

impl ConfigOptions {
    /// Builder method to set the path mode
    pub fn with_path_mode(mut self, path_mode: PathMode) -> Self {
        self.path_mode = path_mode;
        self
    }
}
