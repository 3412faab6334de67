//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command, option
//! loading on top of the library's [`ConfigBuilder`], and output helpers.

use crate::error::CliError;
use clap::ValueEnum;
use safepath::{ConfigBuilder, Error as LibError, Separator};
use serde::Serialize;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress warnings.
    pub quiet: bool,

    /// Separator override from `--separator` or `SAFEPATH_SEPARATOR`.
    pub separator: Option<String>,
}

/// Output format for commands that print structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Start a [`ConfigBuilder`] with the global separator override applied.
///
/// Command-specific overrides are layered on by the caller before `build`.
pub fn options_builder(global: &GlobalOptions) -> Result<ConfigBuilder, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref value) = global.separator {
        let separator = Separator::parse(value)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        builder = builder.with_separator(separator);
    }
    Ok(builder)
}

/// Build a [`ConfigBuilder`] into options, reporting bad environment values
/// as configuration errors.
pub fn build_options(builder: ConfigBuilder) -> Result<safepath::NormalizeOptions, CliError> {
    builder.build().map_err(|e| match e {
        LibError::InvalidSeparator { .. } | LibError::Validation { .. } => {
            CliError::Config(e.to_string())
        }
        other => CliError::from(other),
    })
}

/// Resolve the separator for the lexical commands.
pub fn resolve_separator(global: &GlobalOptions) -> Result<Separator, CliError> {
    Ok(build_options(options_builder(global)?)?.separator)
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_separator_wins() {
        let global = GlobalOptions {
            separator: Some(":".to_string()),
            ..GlobalOptions::default()
        };
        assert_eq!(resolve_separator(&global).unwrap(), Separator::new(':'));
    }

    #[test]
    fn test_invalid_separator_is_argument_error() {
        let global = GlobalOptions {
            separator: Some("::".to_string()),
            ..GlobalOptions::default()
        };
        let err = resolve_separator(&global).unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments(_)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
