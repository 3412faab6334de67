//! Command to show how two paths relate.

use crate::error::CliError;
use crate::utils::{print_json, resolve_separator, GlobalOptions, OutputFormat};
use clap::Args;
use safepath::PathRelationship;

/// Show the lexical relationship between two paths.
#[derive(Args)]
pub struct RelationshipCommand {
    /// First path
    #[arg(value_name = "A")]
    pub path1: String,

    /// Second path
    #[arg(value_name = "B")]
    pub path2: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl RelationshipCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let separator = resolve_separator(global)?;
        let relationship = PathRelationship::between_with(&self.path1, &self.path2, separator);

        match self.format {
            OutputFormat::Text => {
                println!("{}", relationship.description(&self.path1, &self.path2));
            }
            OutputFormat::Json => print_json(&serde_json::json!({
                "path1": self.path1,
                "path2": self.path2,
                "relationship": relationship,
            }))?,
        }

        Ok(())
    }
}
