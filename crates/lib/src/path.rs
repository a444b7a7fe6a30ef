//! Dot-path types for addressing nested configuration values.
//!
//! The Path/PathBuf types follow the same borrowed/owned pattern as
//! std::path::Path/PathBuf.
//!
//! A path is split on `.` into segments, each naming one level of the tree.
//! Paths are taken literally: an empty segment (from a leading, trailing or
//! doubled dot) is the key `""`, not something to skip. Splitting always
//! yields at least one segment, so even `""` addresses one key.
//!
//! # Usage
//!
//! ```rust
//! use simpleconfig::path::{Path, PathBuf};
//!
//! let path = Path::new("aaa.bbb.ccc");
//! assert_eq!(path.segments().collect::<Vec<_>>(), vec!["aaa", "bbb", "ccc"]);
//!
//! let built = PathBuf::from("aaa").push("bbb").push("ccc");
//! assert_eq!(built.as_path(), path);
//!
//! // Empty segments are literal keys
//! let trailing = Path::new("aaa.");
//! assert_eq!(trailing.segments().collect::<Vec<_>>(), vec!["aaa", ""]);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref};

/// The segment separator.
pub const SEPARATOR: char = '.';

/// A borrowed dot-path.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

/// An owned dot-path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathBuf {
    inner: String,
}

impl Path {
    /// Wraps a string slice as a path.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        let s: &str = s.as_ref();
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the segments. Never empty.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> + Clone {
        self.inner.split(SEPARATOR)
    }

    /// Returns the number of segments (at least one).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Splits into the parent path and the last segment.
    ///
    /// ```rust
    /// # use simpleconfig::path::Path;
    /// let (parent, last) = Path::new("a.b.c").split_last();
    /// assert_eq!(parent.map(Path::as_str), Some("a.b"));
    /// assert_eq!(last, "c");
    ///
    /// assert_eq!(Path::new("a").split_last(), (None, "a"));
    /// ```
    pub fn split_last(&self) -> (Option<&Path>, &str) {
        match self.inner.rfind(SEPARATOR) {
            Some(dot) => (Some(Path::new(&self.inner[..dot])), &self.inner[dot + 1..]),
            None => (None, &self.inner),
        }
    }

    /// Returns the last segment.
    pub fn last(&self) -> &str {
        self.split_last().1
    }

    /// Returns the parent path, or `None` for a single-segment path.
    pub fn parent(&self) -> Option<&Path> {
        self.split_last().0
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl PathBuf {
    /// Creates a path from its string form.
    pub fn new(path: impl Into<String>) -> Self {
        Self { inner: path.into() }
    }

    /// Appends a path (one or more segments) to the end of this path.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        self.inner.push(SEPARATOR);
        self.inner.push_str(path.as_ref());
        self
    }

    /// Builds a path from individual segments.
    ///
    /// Returns `None` when there are no segments, since every path has at
    /// least one.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = segments.into_iter();
        let first = segments.next()?;
        Some(segments.fold(PathBuf::new(first.as_ref()), |path, segment| path.push(segment)))
    }

    pub fn as_path(&self) -> &Path {
        self
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PathBuf {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.inner)
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Constructs a path.
///
/// - `path!("user.profile.name")` - Single literal, returns `&'static Path`
/// - `path!("user", "profile", "name")` - Multiple segments, returns `PathBuf`
/// - `path!(base, "profile", index)` - Anything implementing `Display`
///
/// ```rust
/// # use simpleconfig::path;
/// let literal = path!("servers.0.host");
/// let index = 0;
/// let built = path!("servers", index, "host");
/// assert_eq!(literal, built.as_path());
/// ```
#[macro_export]
macro_rules! path {
    ($single:literal) => {
        $crate::path::Path::new($single)
    };

    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let path = $crate::path::PathBuf::new($first.to_string());
        $(
            let path = path.push($rest.to_string());
        )+
        path
    }};
}
