//! Integration tests for the safepath CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("safepath").expect("Failed to find safepath binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("safepath").expect("Failed to find safepath binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("safepath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag lists every subcommand.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("safepath").expect("Failed to find safepath binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("is-subpath"))
        .stdout(predicate::str::contains("relationship"))
        .stdout(predicate::str::contains("same"));
}

#[test]
fn test_unknown_subcommand_fails() {
    TestEnv::new()
        .command()
        .arg("canonicalize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_invalid_separator_flag() {
    TestEnv::new()
        .command()
        .args(["--separator", "::", "split", "a::b"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid separator"));
}

#[test]
fn test_invalid_separator_env() {
    TestEnv::new()
        .command()
        .env("SAFEPATH_SEPARATOR", "")
        .args(["split", "a/b"])
        .assert()
        .code(4);
}

#[test]
fn test_invalid_boolean_env_is_config_error() {
    TestEnv::new()
        .command()
        .env("SAFEPATH_VERIFY", "sometimes")
        .args(["normalize", "/"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_completions_bash() {
    TestEnv::new()
        .command()
        .args(["--quiet", "completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("safepath"));
}
