//! Filesystem identity lookups.
//!
//! Every lookup here is non-dereferencing (`lstat`): a trailing symbolic link
//! is identified as the link itself, never as its target.

use std::fs;
use std::os::unix::fs::MetadataExt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The (device, inode) pair of a non-dereferencing stat.
///
/// Two identities are equal iff both fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileIdentity {
    /// Device id.
    pub dev: u64,
    /// Inode number.
    pub ino: u64,
}

impl FileIdentity {
    /// Create an identity from raw device and inode numbers.
    #[must_use]
    pub const fn new(dev: u64, ino: u64) -> Self {
        Self { dev, ino }
    }

    /// Extract the identity from metadata.
    #[must_use]
    pub fn from_metadata(meta: &fs::Metadata) -> Self {
        Self::new(meta.dev(), meta.ino())
    }
}

/// Source of filesystem identity information.
///
/// The normalizer only ever asks two questions of the filesystem, and both go
/// through this trait so tests can answer them without touching a disk.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityLookup {
    /// Identity of `path`, without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if `path` cannot be stat'ed.
    fn identity(&self, path: &str) -> Result<FileIdentity>;

    /// Whether `path` is a directory and not a symlink to one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if `path` cannot be stat'ed.
    fn is_real_dir(&self, path: &str) -> Result<bool>;

    /// Whether two paths name the same object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if either path cannot be stat'ed.
    fn same_identity(&self, path1: &str, path2: &str) -> Result<bool> {
        Ok(self.identity(path1)? == self.identity(path2)?)
    }
}

/// [`IdentityLookup`] backed by `std::fs::symlink_metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLookup;

impl FsLookup {
    /// Create a new filesystem lookup.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn lstat(path: &str) -> Result<fs::Metadata> {
        fs::symlink_metadata(path).map_err(|e| Error::lookup(path, e))
    }
}

impl IdentityLookup for FsLookup {
    fn identity(&self, path: &str) -> Result<FileIdentity> {
        Self::lstat(path).map(|meta| FileIdentity::from_metadata(&meta))
    }

    fn is_real_dir(&self, path: &str) -> Result<bool> {
        // symlink_metadata reports a link as a link, so is_dir() is false for it
        Self::lstat(path).map(|meta| meta.file_type().is_dir())
    }
}

/// Whether two paths name the same filesystem object, comparing the links
/// themselves rather than their targets.
///
/// # Errors
///
/// Returns [`Error::Lookup`] if either path is inaccessible.
///
/// # Examples
///
/// ```
/// use safepath::same_link_identity;
///
/// assert!(same_link_identity("/", "/.").unwrap());
/// assert!(same_link_identity("/", "/..").unwrap());
/// ```
pub fn same_link_identity(path1: &str, path2: &str) -> Result<bool> {
    FsLookup.same_identity(path1, path2)
}
