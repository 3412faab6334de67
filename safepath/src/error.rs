//! Error types for the safepath library.
//!
//! This module provides the error hierarchy for path normalization, using
//! `thiserror` for ergonomic error handling.
//!
//! Two failure classes matter to callers:
//!
//! - [`Error::Lookup`]: a path (or an intermediate candidate) could not be
//!   stat'ed. The filesystem may have changed; retrying after a fresh look is
//!   the caller's decision.
//! - [`Error::Consistency`]: an identity check failed while collapsing. This
//!   signals a race between snapshot and use, or a defect, and must not be
//!   retried blindly.

use std::io;
use std::io::ErrorKind;

use thiserror::Error;

/// Result type alias for operations that may fail with a safepath error.
///
/// # Examples
///
/// ```
/// use safepath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the safepath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be looked up (missing, permission denied, ...).
    #[error("cannot stat '{path}': {source}")]
    Lookup {
        /// The path whose lookup failed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Filesystem identity changed while a path was being normalized.
    #[error("consistency check failed while normalizing '{original}' (candidate '{candidate}'): {details}")]
    Consistency {
        /// The path passed to the normalizer.
        original: String,
        /// The intermediate or final path whose identity did not match.
        candidate: String,
        /// What was being checked when the mismatch occurred.
        details: String,
    },

    /// The path separator is not exactly one character.
    #[error("invalid separator {value:?}: expected exactly one character")]
    InvalidSeparator {
        /// The rejected separator value.
        value: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Serializing a result to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a lookup error for `path`.
    pub(crate) fn lookup(path: impl Into<String>, source: io::Error) -> Self {
        Self::Lookup {
            path: path.into(),
            source,
        }
    }

    /// Check if this is a lookup failure of any kind.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }

    /// Check if this error indicates a missing path.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::same_link_identity;
    ///
    /// let err = same_link_identity("/definitely/not/here", "/").unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Lookup { source, .. } if source.kind() == ErrorKind::NotFound)
    }

    /// Check if this error is a permission denied lookup failure.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Lookup { source, .. } if source.kind() == ErrorKind::PermissionDenied)
    }

    /// Check if this error is a fatal identity mismatch.
    #[must_use]
    pub fn is_consistency(&self) -> bool {
        matches!(self, Self::Consistency { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = Error::lookup("/missing", io::Error::from(ErrorKind::NotFound));
        let msg = err.to_string();
        assert!(msg.contains("/missing"));
        assert!(err.is_lookup());
        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
        assert!(!err.is_consistency());
    }

    #[test]
    fn test_permission_denied() {
        let err = Error::lookup("/secret", io::Error::from(ErrorKind::PermissionDenied));
        assert!(err.is_permission_denied());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_lookup_error_source() {
        use std::error::Error as _;

        let err = Error::lookup("/missing", io::Error::from(ErrorKind::NotFound));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_consistency_error() {
        let err = Error::Consistency {
            original: "a/b/../c".to_string(),
            candidate: "a/c".to_string(),
            details: "final identity differs".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("a/b/../c"));
        assert!(msg.contains("a/c"));
        assert!(msg.contains("final identity differs"));
        assert!(err.is_consistency());
        assert!(!err.is_lookup());
    }

    #[test]
    fn test_invalid_separator_error() {
        let err = Error::InvalidSeparator {
            value: "::".to_string(),
        };
        assert!(err.to_string().contains("\"::\""));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "SAFEPATH_VERIFY".to_string(),
            message: "not a boolean".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "validation error for 'SAFEPATH_VERIFY': not a boolean"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u8> {
            Ok(1)
        }
        assert_eq!(returns_result().unwrap(), 1);
    }
}
