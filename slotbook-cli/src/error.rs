//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use slotbook::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for database lock.
    Timeout,

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (slot taken, not found, bad status, not allowed)
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::SlotTaken { .. }
                | LibError::NotFound { .. }
                | LibError::InvalidStatus { .. }
                | LibError::InvalidTransition { .. }
                | LibError::Authorization { .. } => 1,
                LibError::Validation { .. } => 4,
                _ => 6,
            },
            CliError::Timeout => 2,
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout => write!(f, "Timeout waiting for database lock"),
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Data directory not found (use --data-dir or enable auto-init)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
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
        if e.is_busy() {
            return CliError::Timeout;
        }
        match e {
            LibError::Configuration(inner) => CliError::Config(inner.to_string()),
            LibError::Io(inner) => CliError::Io(inner),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_semantic_failures_exit_one() {
        let taken = CliError::from(LibError::SlotTaken {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: "10:00".parse().unwrap(),
        });
        assert_eq!(taken.exit_code(), 1);

        let missing = CliError::from(LibError::NotFound {
            resource: "reservation 7".into(),
        });
        assert_eq!(missing.exit_code(), 1);

        let status = CliError::from(LibError::InvalidStatus {
            value: "Bogus".into(),
        });
        assert_eq!(status.exit_code(), 1);
    }

    #[test]
    fn test_lock_timeout_maps_to_timeout() {
        let err = CliError::from(LibError::LockTimeout { seconds: 5 });
        assert!(matches!(err, CliError::Timeout));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_validation_is_invalid_arguments_code() {
        let err = CliError::from(LibError::Validation {
            field: "time".into(),
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_other_codes() {
        assert_eq!(CliError::NoDataDirectory.exit_code(), 3);
        assert_eq!(
            CliError::from(std::io::Error::other("disk")).exit_code(),
            5
        );
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);
    }
}
