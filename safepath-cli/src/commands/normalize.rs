//! Command to normalize paths.

use crate::error::CliError;
use crate::utils::{build_options, options_builder, print_json, GlobalOptions, OutputFormat};
use clap::Args;
use safepath::{Normalized, Normalizer};

/// Normalize paths, collapsing `..` only after real directories.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Leave `..` alone and never touch the filesystem
    #[arg(long)]
    pub no_collapse: bool,

    /// Skip the identity checks between steps
    #[arg(long)]
    pub no_verify: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail if any path tries to ascend above the root
    #[arg(long)]
    pub deny_root_escape: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut builder = options_builder(global)?;
        if self.no_collapse {
            builder = builder.with_collapse_dotdots(false);
        }
        if self.no_verify {
            builder = builder.with_verify(false);
        }
        let normalizer = Normalizer::new(build_options(builder)?);

        let results = self
            .paths
            .iter()
            .map(|path| normalizer.normalize(path))
            .collect::<Result<Vec<_>, _>>()?;

        match self.format {
            OutputFormat::Text => {
                for result in &results {
                    println!("{result}");
                }
            }
            OutputFormat::Json => print_json(&results)?,
        }

        let escapes: usize = results.iter().map(Normalized::root_escapes).sum();
        if self.deny_root_escape && escapes > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{escapes} attempt(s) to ascend above the root"
            )));
        }

        Ok(())
    }
}
