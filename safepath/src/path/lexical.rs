//! String-only path helpers.
//!
//! Nothing here touches the filesystem. `..` segments are never removed,
//! so the results say nothing about which object a path names; callers that
//! need a filesystem-verified answer should run both paths through
//! [`normalize`](crate::path::normalize::normalize) first.

use crate::config::NormalizeOptions;
use crate::path::identity::FsLookup;
use crate::path::normalize::Normalizer;
use crate::path::segments::{Segments, Separator};

/// Split `path` into lexically cleaned segments using the platform separator.
///
/// Interior empty and `.` segments are dropped; `..` segments and the first
/// and last segments are kept.
///
/// # Examples
///
/// ```
/// use safepath::split_segments;
///
/// assert_eq!(split_segments("../..//some/./path").as_slice(), ["..", "..", "some", "path"]);
/// assert_eq!(split_segments("////../x").as_slice(), ["", "..", "x"]);
/// assert_eq!(split_segments("a/b/").as_slice(), ["a", "b", ""]);
/// ```
#[must_use]
pub fn split_segments(path: &str) -> Segments {
    split_segments_with(path, Separator::default())
}

/// [`split_segments`] with an explicit separator.
#[must_use]
pub fn split_segments_with(path: &str, separator: Separator) -> Segments {
    let options = NormalizeOptions {
        separator,
        ..NormalizeOptions::lexical()
    };
    let normalized = match Normalizer::with_lookup(FsLookup, options).normalize(path) {
        Ok(normalized) => normalized.path,
        // Lexical options never perform a lookup, so there is nothing to fail
        Err(_) => path.to_string(),
    };
    Segments::split(&normalized, separator)
}

/// Whether `file` lies lexically at or below `base`.
///
/// Both paths are cleaned with [`split_segments`] and compared segment by
/// segment. Equal paths count as subpaths.
///
/// # Examples
///
/// ```
/// use safepath::is_subpath;
///
/// assert!(is_subpath("a/b", "a/b/c"));
/// assert!(is_subpath("a/b", "a//./b"));
/// assert!(!is_subpath("a/bc", "a/b/c"));
/// assert!(!is_subpath("/a", "a/b"));
/// ```
#[must_use]
pub fn is_subpath(base: &str, file: &str) -> bool {
    is_subpath_with(base, file, Separator::default())
}

/// [`is_subpath`] with an explicit separator.
#[must_use]
pub fn is_subpath_with(base: &str, file: &str, separator: Separator) -> bool {
    let base = split_segments_with(base, separator);
    let file = split_segments_with(file, separator);
    file.starts_with(&base)
}
