//! Normalization options.
//!
//! Options come from three layers, highest precedence first:
//!
//! 1. Programmatic overrides (via [`ConfigBuilder`] setters)
//! 2. Environment variables (`SAFEPATH_*`)
//! 3. Built-in defaults (collapse `..`, verify identity, platform separator)
//!
//! # Examples
//!
//! ```
//! use safepath::config::{ConfigBuilder, NormalizeOptions};
//! use safepath::path::Separator;
//!
//! let options = ConfigBuilder::new()
//!     .skip_env()
//!     .with_verify(false)
//!     .build()
//!     .unwrap();
//!
//! assert!(options.collapse_dotdots);
//! assert!(!options.verify);
//! assert_eq!(options.separator, Separator::default());
//! ```

pub mod builder;
pub mod environment;

use crate::path::Separator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;

/// Options controlling a single normalization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Collapse `..` segments where it is provably safe.
    ///
    /// When false, no `..` is removed and the filesystem is never touched.
    pub collapse_dotdots: bool,

    /// Check filesystem identity at every step and at the end.
    pub verify: bool,

    /// Path separator.
    pub separator: Separator,
}

impl NormalizeOptions {
    /// Options for pure string cleanup: no `..` collapsing, no lookups.
    #[must_use]
    pub fn lexical() -> Self {
        Self {
            collapse_dotdots: false,
            verify: false,
            ..Self::default()
        }
    }

    /// Whether these options lead to any filesystem access.
    #[must_use]
    pub const fn touches_filesystem(&self) -> bool {
        self.collapse_dotdots
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            collapse_dotdots: true,
            verify: true,
            separator: Separator::default(),
        }
    }
}
