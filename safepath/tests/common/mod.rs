//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for laying out small directory
//! trees with symlinks in a temporary directory.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary directory tree.
///
/// The root is canonicalized so tests never walk through a symlinked
/// temporary directory (as on macOS, where `/var` is a link).
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .dir("dir/real")
///     .file("dir/x")
///     .link("dir/link", "real");
/// let path = tree.path("dir/link/../x");
/// ```
pub struct TreeFixture {
    // Held for its Drop impl
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Create an empty tree in a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created. This is
    /// acceptable in test code where we want to fail fast.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = fs::canonicalize(temp.path()).expect("canonicalize temp dir");
        Self { _temp: temp, root }
    }

    /// Create a directory (and its parents) at `rel`.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.root.join(rel)).expect("create dir");
        self
    }

    /// Create an empty file at `rel`, creating parent directories.
    pub fn file(self, rel: &str) -> Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(path, b"").expect("write file");
        self
    }

    /// Create a symlink at `rel` pointing to `target` (stored verbatim).
    pub fn link(self, rel: &str, target: &str) -> Self {
        symlink(target, self.root.join(rel)).expect("create symlink");
        self
    }

    /// Create a hard link at `rel` to the existing file `existing`.
    pub fn hard_link(self, rel: &str, existing: &str) -> Self {
        fs::hard_link(self.root.join(existing), self.root.join(rel)).expect("create hard link");
        self
    }

    /// The canonical root of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The root as a string.
    pub fn root_str(&self) -> &str {
        self.root.to_str().expect("temp dir path is UTF-8")
    }

    /// An absolute path string for `rel` under the root, left unnormalized.
    pub fn path(&self, rel: &str) -> String {
        format!("{}/{rel}", self.root_str())
    }
}

impl Default for TreeFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_layout() {
        let tree = TreeFixture::new()
            .dir("a/b")
            .file("a/f")
            .link("a/l", "b");

        assert!(tree.root().join("a/b").is_dir());
        assert!(tree.root().join("a/f").is_file());
        assert!(fs::symlink_metadata(tree.root().join("a/l"))
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(tree.path("a/f"), format!("{}/a/f", tree.root_str()));
    }
}
