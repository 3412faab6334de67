//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, IsSubpathCommand, NormalizeCommand, RelationshipCommand, SameCommand,
    SplitCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for symlink-safe path normalization.
#[derive(Parser)]
#[command(name = "safepath")]
#[command(version, about = "Normalize paths without changing what they point to", long_about = None)]
pub struct Cli {
    /// Enable verbose output (per-step normalization trace)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress warnings
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path separator, exactly one character
    #[arg(long, value_name = "CHAR", global = true, env = "SAFEPATH_SEPARATOR")]
    pub separator: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize paths, collapsing `..` only where it is safe
    Normalize(NormalizeCommand),

    /// Split a path into lexically cleaned segments
    Split(SplitCommand),

    /// Exit 0 if FILE lies lexically at or below BASE
    IsSubpath(IsSubpathCommand),

    /// Show how two paths relate lexically
    Relationship(RelationshipCommand),

    /// Exit 0 if two paths name the same object (without following a final symlink)
    Same(SameCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_normalize_flags() {
        let cli = Cli::try_parse_from([
            "safepath",
            "normalize",
            "--no-collapse",
            "--format",
            "json",
            "a/../b",
            "c",
        ])
        .unwrap();
        match cli.command {
            Command::Normalize(cmd) => {
                assert!(cmd.no_collapse);
                assert!(!cmd.no_verify);
                assert_eq!(cmd.paths, ["a/../b", "c"]);
            }
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["safepath", "split", "a:b", "--separator", ":", "--quiet"])
                .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.separator.as_deref(), Some(":"));
    }

    #[test]
    fn test_normalize_requires_a_path() {
        assert!(Cli::try_parse_from(["safepath", "normalize"]).is_err());
    }
}
