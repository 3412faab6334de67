//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use safepath::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error while writing output.
    Io(std::io::Error),

    /// Configuration error (bad `SAFEPATH_*` variable).
    Config(String),

    /// Semantic failure (false answer, denied root escape) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., paths are not related)
    /// - 2: A path could not be looked up
    /// - 3: Filesystem identity changed during normalization
    /// - 4: Invalid arguments or configuration
    /// - 5: I/O or output serialization error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::Lookup { .. } => 2,
                LibError::Consistency { .. } => 3,
                LibError::InvalidSeparator { .. } | LibError::Validation { .. } => 4,
                LibError::Json(_) => 5,
            },
            CliError::InvalidArguments(_) | CliError::Config(_) => 4,
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Library(LibError::from(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let lookup = LibError::Lookup {
            path: "x".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(CliError::from(lookup).exit_code(), 2);

        let consistency = LibError::Consistency {
            original: "a".to_string(),
            candidate: "b".to_string(),
            details: "changed".to_string(),
        };
        assert_eq!(CliError::from(consistency).exit_code(), 3);

        let separator = LibError::InvalidSeparator {
            value: "ab".to_string(),
        };
        assert_eq!(CliError::from(separator).exit_code(), 4);

        assert_eq!(CliError::SemanticFailure("no".into()).exit_code(), 1);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 4);
        assert_eq!(CliError::InvalidArguments("bad".into()).exit_code(), 4);
        assert_eq!(
            CliError::Io(io::Error::from(io::ErrorKind::BrokenPipe)).exit_code(),
            5
        );
    }

    #[test]
    fn test_display_passes_library_message_through() {
        let err = CliError::from(LibError::InvalidSeparator {
            value: "ab".to_string(),
        });
        assert!(err.to_string().contains("invalid separator"));
        assert_eq!(CliError::SemanticFailure("nope".into()).to_string(), "nope");
    }
}
