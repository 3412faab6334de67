//! Build script for safepath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .help("Output format")
        .value_name("FORMAT")
        .value_parser(["text", "json"])
        .default_value("text")
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("safepath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize paths without changing what they point to")
        .long_about(
            "Collapse redundant separators, `.` and `..` segments in paths. A `..` is only \
             removed when the segment before it is a real directory, and every step is checked \
             against the device and inode of the original path.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output (per-step normalization trace)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress warnings")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Path separator, exactly one character")
                .value_name("CHAR")
                .global(true)
                .env("SAFEPATH_SEPARATOR"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Normalize paths, collapsing `..` only where it is safe")
                .arg(Arg::new("paths").value_name("PATH").num_args(1..).required(true))
                .arg(
                    Arg::new("no-collapse")
                        .long("no-collapse")
                        .help("Leave `..` alone and never touch the filesystem")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-verify")
                        .long("no-verify")
                        .help("Skip the identity checks between steps")
                        .action(ArgAction::SetTrue),
                )
                .arg(format_arg())
                .arg(
                    Arg::new("deny-root-escape")
                        .long("deny-root-escape")
                        .help("Fail if any path tries to ascend above the root")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("split")
                .about("Split a path into lexically cleaned segments")
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(format_arg()),
            Command::new("is-subpath")
                .about("Exit 0 if FILE lies lexically at or below BASE")
                .arg(Arg::new("base").value_name("BASE").required(true))
                .arg(Arg::new("file").value_name("FILE").required(true)),
            Command::new("relationship")
                .about("Show how two paths relate lexically")
                .arg(Arg::new("path1").value_name("A").required(true))
                .arg(Arg::new("path2").value_name("B").required(true))
                .arg(format_arg()),
            Command::new("same")
                .about("Exit 0 if two paths name the same object")
                .arg(Arg::new("path1").value_name("PATH1").required(true))
                .arg(Arg::new("path2").value_name("PATH2").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
                ),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("safepath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
