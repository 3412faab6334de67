//! Main entry point for the safepath CLI.
//!
//! This is the command-line interface for symlink-safe path normalization.
//! It exposes every library operation as a subcommand:
//! - `normalize`: Collapse `.`, empty and (where safe) `..` segments
//! - `split`: Split a path into lexically cleaned segments
//! - `is-subpath`: Lexical prefix test
//! - `relationship`: Ancestor / descendant / same / unrelated
//! - `same`: Compare two paths by filesystem identity

use clap::Parser;
use safepath_cli::cli::{Cli, Command};
use safepath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route the library's log records to stderr
    if let Err(e) = safepath::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        separator: cli.separator,
    };

    let result = match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Split(cmd) => cmd.execute(&global),
        Command::IsSubpath(cmd) => cmd.execute(&global),
        Command::Relationship(cmd) => cmd.execute(&global),
        Command::Same(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
