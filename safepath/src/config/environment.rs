//! Environment variable handling for option overrides.
//!
//! This module provides support for `SAFEPATH_*` environment variables that
//! override the built-in defaults.

use crate::config::NormalizeOptions;
use crate::error::{Error, Result};
use crate::path::Separator;
use std::env;

/// Environment variable naming the path separator.
pub const SEPARATOR_VAR: &str = "SAFEPATH_SEPARATOR";

/// Environment variable toggling `..` collapsing.
pub const COLLAPSE_DOTDOTS_VAR: &str = "SAFEPATH_COLLAPSE_DOTDOTS";

/// Environment variable toggling identity verification.
pub const VERIFY_VAR: &str = "SAFEPATH_VERIFY";

/// Handles environment variable overrides for normalization options.
///
/// # Examples
///
/// ```no_run
/// use safepath::config::{EnvironmentConfig, NormalizeOptions};
///
/// let mut options = NormalizeOptions::default();
/// EnvironmentConfig::apply_overrides(&mut options).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid boolean or a separator
    /// that is not exactly one character.
    pub fn apply_overrides(options: &mut NormalizeOptions) -> Result<()> {
        if let Ok(val) = env::var(SEPARATOR_VAR) {
            options.separator = Separator::parse(&val)?;
        }

        if let Ok(val) = env::var(COLLAPSE_DOTDOTS_VAR) {
            options.collapse_dotdots = Self::parse_bool(COLLAPSE_DOTDOTS_VAR, &val)?;
        }

        if let Ok(val) = env::var(VERIFY_VAR) {
            options.verify = Self::parse_bool(VERIFY_VAR, &val)?;
        }

        Ok(())
    }

    /// Parse a boolean from an environment variable value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for anything outside
    /// true/false/1/0/yes/no/on/off (case-insensitive).
    pub fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
