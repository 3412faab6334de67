//! Command to split a path into segments.

use crate::error::CliError;
use crate::utils::{print_json, resolve_separator, GlobalOptions, OutputFormat};
use clap::Args;
use safepath::path::split_segments_with;

/// Split a path into lexically cleaned segments.
///
/// Text output prints one segment per line; a leading empty line marks an
/// absolute path.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SplitCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let segments = split_segments_with(&self.path, resolve_separator(global)?);

        match self.format {
            OutputFormat::Text => {
                for segment in &segments {
                    println!("{segment}");
                }
            }
            OutputFormat::Json => print_json(&segments)?,
        }

        Ok(())
    }
}
