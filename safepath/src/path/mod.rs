//! Symlink-aware path handling.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A path is split on a single-character [`Separator`] into [`Segments`].
//! A leading empty segment marks an absolute path. Interior empty and `.`
//! segments carry no meaning and are dropped; the first and last segments are
//! always kept, so `/a/b/.` keeps its trailing `.` (which names the directory
//! `b` points to when `b` is a symlink).
//!
//! ## Safe normalization
//!
//! [`Normalizer`] removes `..` only where the preceding segment is a real
//! directory, as seen by `lstat`. `link/..` is left alone. With verification
//! on, every step is checked against a [`FileIdentity`] snapshot of the input.
//!
//! ```no_run
//! use safepath::path::normalize::normalize;
//!
//! let normalized = normalize("/usr/lib/../bin/./ls").unwrap();
//! println!("{normalized}");
//! ```
//!
//! ## Lexical helpers
//!
//! [`split_segments`] and [`is_subpath`] never touch the filesystem:
//!
//! ```
//! use safepath::path::{is_subpath, split_segments};
//!
//! assert_eq!(split_segments("a//./b").as_slice(), ["a", "b"]);
//! assert!(is_subpath("/home/user", "/home/user/project"));
//! ```

pub mod identity;
pub mod lexical;
pub mod normalize;
pub mod relationship;
pub mod segments;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use identity::{same_link_identity, FileIdentity, FsLookup, IdentityLookup};
pub use lexical::{is_subpath, is_subpath_with, split_segments, split_segments_with};
pub use normalize::{normalize_with, Normalized, Normalizer, Notice, Step, StepAction};
pub use relationship::PathRelationship;
pub use segments::{Segments, Separator};
