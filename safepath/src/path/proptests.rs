//! Property-based tests against a real directory tree.
//!
//! Note: the lexical helpers carry their own property tests. This module
//! exercises the verified normalizer on random walks through a small tree
//! mixing real directories and symlinks.

use super::identity::{FsLookup, IdentityLookup};
use super::normalize::normalize;
use proptest::prelude::*;
use std::fs;
use std::os::unix::fs::symlink;
use tempfile::TempDir;

/// Build `a/a/a` with a sibling symlink `l -> a` at each level.
fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut level = dir.path().to_path_buf();
    for _ in 0..3 {
        fs::create_dir(level.join("a")).unwrap();
        symlink("a", level.join("l")).unwrap();
        level = level.join("a");
    }
    dir
}

fn walk_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop_oneof![Just("a"), Just("l"), Just(".."), Just("."), Just("")], 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // identity(normalize(p)) == identity(p) for every existing p
    #[test]
    fn normalize_preserves_identity(walk in walk_strategy()) {
        let dir = fixture();
        let path = format!("{}/{}", dir.path().to_str().unwrap(), walk.join("/"));
        prop_assume!(fs::symlink_metadata(&path).is_ok());

        let normalized = normalize(&path).unwrap();
        prop_assert_eq!(
            FsLookup.identity(&normalized.path).unwrap(),
            FsLookup.identity(&path).unwrap()
        );
    }

    // Normalizing twice lands on the same object
    #[test]
    fn normalize_idempotent_identity(walk in walk_strategy()) {
        let dir = fixture();
        let path = format!("{}/{}", dir.path().to_str().unwrap(), walk.join("/"));
        prop_assume!(fs::symlink_metadata(&path).is_ok());

        let once = normalize(&path).unwrap();
        let twice = normalize(&once.path).unwrap();
        prop_assert_eq!(
            FsLookup.identity(&once.path).unwrap(),
            FsLookup.identity(&twice.path).unwrap()
        );
    }

    // Every ".." that survives follows a symlink, another "..", or nothing
    #[test]
    fn surviving_dotdots_are_justified(walk in walk_strategy()) {
        let dir = fixture();
        let path = format!("{}/{}", dir.path().to_str().unwrap(), walk.join("/"));
        prop_assume!(fs::symlink_metadata(&path).is_ok());

        let normalized = normalize(&path).unwrap();
        let segments: Vec<&str> = normalized.path.split('/').collect();
        for pair in segments.windows(2) {
            if pair[1] == ".." {
                let prefix = pair[0];
                prop_assert!(
                    prefix == ".." || prefix == "l" || prefix.is_empty(),
                    "unexpected '..' after {:?} in {}", prefix, normalized.path
                );
            }
        }
    }
}
