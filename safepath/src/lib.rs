#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # safepath
//!
//! Path normalization that never changes which file a path refers to.
//!
//! A string-only normalizer rewrites `a/link/../b` to `a/b`, which names a
//! different file whenever `link` is a symbolic link. This library collapses
//! `..` only when the segment before it is a real directory, and checks the
//! filesystem identity (device + inode, without following a final symlink)
//! of the path at every step.
//!
//! ## Core Types
//!
//! - [`Normalizer`] and [`normalize`]: the verified, symlink-safe normalizer
//! - [`split_segments`] and [`is_subpath`]: string-only helpers
//! - [`same_link_identity`]: `lstat`-based identity comparison
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use safepath::{is_subpath, split_segments};
//!
//! assert_eq!(split_segments("/a/./b//c").as_slice(), ["", "a", "b", "c"]);
//! assert!(is_subpath("/a/b", "/a/b/c"));
//! assert!(!is_subpath("/a/bc", "/a/b/c"));
//! ```
//!
//! ```no_run
//! use safepath::normalize;
//!
//! let normalized = normalize("/home/user/project/../notes.txt").unwrap();
//! for notice in &normalized.notices {
//!     eprintln!("warning: {notice}");
//! }
//! println!("{}", normalized.path);
//! ```

#[cfg(not(unix))]
compile_error!("safepath relies on device/inode identity and requires a Unix platform");

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, NormalizeOptions};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::normalize::normalize;
pub use path::{
    is_subpath, normalize_with, same_link_identity, split_segments, FileIdentity, FsLookup,
    IdentityLookup, Normalized, Normalizer, Notice, PathRelationship, Segments, Separator,
};
