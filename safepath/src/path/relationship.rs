//! Lexical path relationships.
//!
//! This module classifies how two paths relate in the directory hierarchy,
//! using the same segment-wise comparison as [`is_subpath`]. Like
//! `is_subpath`, the answer is purely lexical.

use serde::Serialize;

use crate::path::lexical::is_subpath_with;
use crate::path::segments::Separator;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use safepath::PathRelationship;
///
/// assert_eq!(
///     PathRelationship::between("/home/user", "/home/user/project"),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths clean up to the same segments.
    Same,

    /// Neither path is a prefix of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths using the platform
    /// separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::PathRelationship;
    ///
    /// assert_eq!(PathRelationship::between("/a", "/a/b"), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between("/a/b", "/a"), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("/a/./", "/a//"), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("/a", "/b"), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &str, path2: &str) -> Self {
        Self::between_with(path1, path2, Separator::default())
    }

    /// [`PathRelationship::between`] with an explicit separator.
    #[must_use]
    pub fn between_with(path1: &str, path2: &str, separator: Separator) -> Self {
        match (
            is_subpath_with(path1, path2, separator),
            is_subpath_with(path2, path1, separator),
        ) {
            (true, true) => Self::Same,
            (true, false) => Self::Ancestor,
            (false, true) => Self::Descendant,
            (false, false) => Self::Unrelated,
        }
    }

    /// Returns `true` for everything except `Unrelated`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is within `directory` (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::PathRelationship;
    ///
    /// assert!(PathRelationship::is_within("/home/user/file.txt", "/home/user"));
    /// assert!(PathRelationship::is_within("/home/user", "/home/user"));
    /// ```
    #[must_use]
    pub fn is_within(path: &str, directory: &str) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &str, other: &str) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &str, path2: &str) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
