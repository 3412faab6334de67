//! Segment splitting.
//!
//! A path is treated as an opaque string over a single-character separator.
//! Splitting keeps empty strings at the boundaries, so a leading empty segment
//! marks an absolute path and a trailing one marks a trailing separator.

use std::fmt;
use std::ops::Index;
use std::path::MAIN_SEPARATOR;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The current directory segment.
pub const CUR_DIR: &str = ".";

/// The parent directory segment.
pub const PARENT_DIR: &str = "..";

/// A validated single-character path separator.
///
/// # Examples
///
/// ```
/// use safepath::path::Separator;
///
/// assert_eq!(Separator::parse("/").unwrap().as_char(), '/');
/// assert!(Separator::parse("//").is_err());
/// assert!(Separator::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separator(char);

impl Separator {
    /// Create a separator from a character.
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Parse a separator from a string, which must be exactly one character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeparator`] if the string is empty or longer
    /// than one character.
    pub fn parse(value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(Error::InvalidSeparator {
                value: value.to_string(),
            }),
        }
    }

    /// The separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self(MAIN_SEPARATOR)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An owned, ordered sequence of path segments.
///
/// # Examples
///
/// ```
/// use safepath::path::{Segments, Separator};
///
/// let sep = Separator::new('/');
/// let segments = Segments::split("/usr//lib/", sep);
/// assert_eq!(segments.as_slice(), ["", "usr", "", "lib", ""]);
/// assert!(segments.is_absolute());
/// assert_eq!(segments.join(sep), "/usr//lib/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segments(Vec<String>);

impl Segments {
    /// Create an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Split `path` on `separator`, preserving empty boundary segments.
    #[must_use]
    pub fn split(path: &str, separator: Separator) -> Self {
        Self(path.split(separator.as_char()).map(str::to_string).collect())
    }

    /// Join the segments back into a path string.
    #[must_use]
    pub fn join(&self, separator: Separator) -> String {
        let mut buf = [0u8; 4];
        self.0.join(separator.as_char().encode_utf8(&mut buf))
    }

    /// Render the sequence as a path suitable for `lstat`.
    ///
    /// An empty sequence is the current directory and the lone empty segment
    /// is the root; both would otherwise join to an empty string.
    #[must_use]
    pub fn render(&self, separator: Separator) -> String {
        match self.0.as_slice() {
            [] => CUR_DIR.to_string(),
            [only] if only.is_empty() => separator.to_string(),
            _ => self.join(separator),
        }
    }

    /// Drop empty and `.` segments, leaving the first and last untouched.
    pub fn strip_interior(&mut self) {
        let len = self.0.len();
        if len <= 2 {
            return;
        }
        let last = self.0.pop();
        let mut kept = Vec::with_capacity(len);
        let mut iter = std::mem::take(&mut self.0).into_iter();
        kept.extend(iter.next());
        kept.extend(iter.filter(|s| !s.is_empty() && s != CUR_DIR));
        kept.extend(last);
        self.0 = kept;
    }

    /// Whether the path starts with the separator.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.0.len() > 1 && self.0.first().is_some_and(String::is_empty)
    }

    /// Whether this is exactly the root (a single empty segment).
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only.is_empty())
    }

    /// Element-wise prefix test. Equal sequences are prefixes of each other.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// The last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Remove and return the last segment.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// A copy of `self` followed by `rest`.
    #[must_use]
    pub fn concat(&self, rest: &[String]) -> Self {
        let mut joined = self.0.clone();
        joined.extend_from_slice(rest);
        Self(joined)
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the sequence, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Iterate over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl Index<usize> for Segments {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<String>> for Segments {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<'a> FromIterator<&'a str> for Segments {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}
