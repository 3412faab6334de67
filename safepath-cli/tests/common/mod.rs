//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - A temporary directory tree with real directories and symlinks
//! - Command builder helpers with a clean environment

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated directory tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        Self { temp_dir, root }
    }

    /// Get a command builder for the binary with `SAFEPATH_*` variables
    /// cleared, so the host environment cannot leak into tests.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("safepath").expect("Failed to find safepath binary");
        for var in [
            "SAFEPATH_SEPARATOR",
            "SAFEPATH_COLLAPSE_DOTDOTS",
            "SAFEPATH_VERIFY",
            "SAFEPATH_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Create a directory (and parents) under the root.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create an empty file under the root.
    pub fn create_file(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, b"").expect("Failed to create test file");
        path
    }

    /// Create a symlink under the root pointing at `target`.
    pub fn create_link(&self, rel: &str, target: &str) -> PathBuf {
        let path = self.root.join(rel);
        symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Absolute path string for `rel`, left unnormalized.
    pub fn path(&self, rel: &str) -> String {
        format!("{}/{rel}", self.root.display())
    }

    /// Get the root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
