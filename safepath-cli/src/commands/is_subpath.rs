//! Command to test whether one path lies under another.

use crate::error::CliError;
use crate::utils::{resolve_separator, GlobalOptions};
use clap::Args;
use safepath::path::is_subpath_with;

/// Exit 0 if FILE lies lexically at or below BASE, 1 otherwise.
#[derive(Args)]
pub struct IsSubpathCommand {
    /// Candidate ancestor
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Candidate descendant
    #[arg(value_name = "FILE")]
    pub file: String,
}

impl IsSubpathCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let separator = resolve_separator(global)?;

        if is_subpath_with(&self.base, &self.file, separator) {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "'{}' is not under '{}'",
                self.file, self.base
            )))
        }
    }
}
