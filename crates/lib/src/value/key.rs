//! Keys of configuration maps.
//!
//! A map key is either a positional index or a name. Path segments and
//! literal keys are canonicalized on the way in: a string that is the plain
//! decimal spelling of an integer addresses the same slot as that integer,
//! so `"0"` and `0` are one key.

use std::fmt;

/// A key inside a [`Map`](super::Map).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Key {
    /// Positional key, as produced by lists and canonical integer strings
    Index(i64),
    /// Named key
    Name(String),
}

impl Key {
    /// Parses a key, canonicalizing integer spellings into [`Key::Index`].
    ///
    /// Only the canonical spelling qualifies: no sign other than a leading
    /// `-`, no leading zeros, no `-0`, and the value must fit in an `i64`.
    ///
    /// ```
    /// # use simpleconfig::value::Key;
    /// assert_eq!(Key::parse("42"), Key::Index(42));
    /// assert_eq!(Key::parse("-3"), Key::Index(-3));
    /// assert_eq!(Key::parse("007"), Key::Name("007".to_string()));
    /// assert_eq!(Key::parse(""), Key::Name(String::new()));
    /// ```
    pub fn parse(s: &str) -> Self {
        if is_canonical_integer(s)
            && let Ok(index) = s.parse::<i64>()
        {
            return Key::Index(index);
        }
        Key::Name(s.to_string())
    }

    /// Returns true if this is a named key
    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }

    /// Returns true if this is a positional key
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns the index if this is a positional key
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// Returns the list position this key addresses, if any.
    ///
    /// Only non-negative indices address list items.
    pub fn as_position(&self) -> Option<usize> {
        self.as_index().and_then(|index| usize::try_from(index).ok())
    }

    /// Re-parses a named key so that integer spellings become indices.
    ///
    /// Keys built outside [`Key::parse`], such as deserialized ones, go
    /// through this before they enter a map.
    pub fn canonicalize(self) -> Self {
        match self {
            Key::Name(name) => Key::from(name),
            index => index,
        }
    }
}

fn is_canonical_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    // "-0" is not the spelling of any integer key
    !(digits == "0" && s.starts_with('-'))
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        if is_canonical_integer(&value)
            && let Ok(index) = value.parse::<i64>()
        {
            return Key::Index(index);
        }
        Key::Name(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::parse(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Index(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as i64)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        *self == Key::parse(other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
