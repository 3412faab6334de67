//! Builder for [`NormalizeOptions`].

use crate::config::{EnvironmentConfig, NormalizeOptions};
use crate::error::Result;
use crate::path::Separator;

/// Builds [`NormalizeOptions`] from defaults, the environment, and explicit
/// overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    skip_env: bool,
    separator: Option<Separator>,
    collapse_dotdots: Option<bool>,
    verify: Option<bool>,
}

impl ConfigBuilder {
    /// Create a builder that reads the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore `SAFEPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Override the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Override `..` collapsing.
    #[must_use]
    pub fn with_collapse_dotdots(mut self, collapse: bool) -> Self {
        self.collapse_dotdots = Some(collapse);
        self
    }

    /// Override identity verification.
    #[must_use]
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = Some(verify);
        self
    }

    /// Build the options.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override is invalid.
    pub fn build(self) -> Result<NormalizeOptions> {
        let mut options = NormalizeOptions::default();

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut options)?;
        }

        if let Some(separator) = self.separator {
            options.separator = separator;
        }
        if let Some(collapse) = self.collapse_dotdots {
            options.collapse_dotdots = collapse;
        }
        if let Some(verify) = self.verify {
            options.verify = verify;
        }

        Ok(options)
    }
}
