//! Command to compare two paths by filesystem identity.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use safepath::same_link_identity;

/// Exit 0 if both paths name the same object, 1 otherwise.
///
/// A final symlink is compared as the link itself, not its target.
#[derive(Args)]
pub struct SameCommand {
    /// First path
    #[arg(value_name = "PATH1")]
    pub path1: String,

    /// Second path
    #[arg(value_name = "PATH2")]
    pub path2: String,
}

impl SameCommand {
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        if same_link_identity(&self.path1, &self.path2)? {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "'{}' and '{}' are different objects",
                self.path1, self.path2
            )))
        }
    }
}
