//! Error types for the slotbook library.
//!
//! This module provides the error hierarchy for every engine and store
//! operation, using `thiserror` for ergonomic error handling.

use chrono::NaiveDate;
use thiserror::Error;

use crate::reservation::Status;
use crate::slot::SlotTime;

/// Result type alias for operations that may fail with a slotbook error.
///
/// # Examples
///
/// ```
/// use slotbook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(10)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the slotbook library.
///
/// Every error is local to a single operation. No operation retries
/// internally, so the caller decides what to do with each variant.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or malformed.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested slot is already occupied by another reservation.
    ///
    /// Callers should refresh availability and pick another slot.
    #[error("slot {date} {time} is no longer available")]
    SlotTaken {
        /// The date of the occupied slot.
        date: NaiveDate,
        /// The time label of the occupied slot.
        time: SlotTime,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An unrecognized status value was supplied.
    #[error("invalid status '{value}': expected one of Pending, Confirmed, Completed")]
    InvalidStatus {
        /// The rejected status value.
        value: String,
    },

    /// A status change moved backwards while forward-only transitions are enforced.
    #[error("status transition {from} -> {to} is not allowed")]
    InvalidTransition {
        /// The current status of the reservation.
        from: Status,
        /// The requested status.
        to: Status,
    },

    /// A privileged operation was attempted without the required capability.
    #[error("not authorized to {operation}")]
    Authorization {
        /// The operation that was refused.
        operation: String,
    },

    /// The underlying store could not complete the request.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database lock could not be acquired in time.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::slot::InvalidSlotError> for Error {
    fn from(err: crate::slot::InvalidSlotError) -> Self {
        Self::Validation {
            field: "time".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::slot::InvalidWindowError> for Error {
    fn from(err: crate::slot::InvalidWindowError) -> Self {
        Self::Validation {
            field: "window".into(),
            message: err.reason,
        }
    }
}

impl Error {
    /// Check if the error reports an occupied slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use slotbook::{Error, SlotTime};
    ///
    /// let err = Error::SlotTaken {
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     time: "10:00".parse::<SlotTime>().unwrap(),
    /// };
    /// assert!(err.is_slot_taken());
    /// ```
    #[must_use]
    pub fn is_slot_taken(&self) -> bool {
        matches!(self, Self::SlotTaken { .. })
    }

    /// Check if the error reports a missing reservation or profile.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is caused by lock contention on the store.
    ///
    /// SQLite reports a busy database once the busy timeout has elapsed.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        match self {
            Self::LockTimeout { .. } => true,
            Self::StoreUnavailable(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}
