//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! slotbook library against real database files.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use slotbook::{
    Caller, Database, DatabaseConfig, GuestInfo, OperatingWindow, ReservationEngine,
    TransitionPolicy, UserId,
};
use tempfile::TempDir;

/// Creates a temporary directory holding a database path.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for the duration of the test.
#[allow(dead_code)]
pub fn temp_database_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slotbook.db");
    (dir, path)
}

/// Opens a new connection to the database at `path`.
#[allow(dead_code)]
pub fn open_database(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}

/// Opens an engine with the default window over the database at `path`.
#[allow(dead_code)]
pub fn open_engine(path: &Path) -> ReservationEngine<Database> {
    open_engine_with_policy(path, TransitionPolicy::Passthrough)
}

/// Opens an engine with the default window and the given policy.
#[allow(dead_code)]
pub fn open_engine_with_policy(
    path: &Path,
    policy: TransitionPolicy,
) -> ReservationEngine<Database> {
    ReservationEngine::new(open_database(path), OperatingWindow::default(), policy)
}

/// Returns a guest caller with distinct contact details per `n`.
#[allow(dead_code)]
pub fn guest(n: usize) -> Caller {
    Caller::guest(
        GuestInfo::new(
            format!("Guest {n}"),
            format!("guest{n}@example.com"),
            format!("555-01{n:02}"),
        )
        .unwrap(),
    )
}

/// Returns a registered, non-admin caller.
#[allow(dead_code)]
pub fn user(id: &str) -> Caller {
    Caller::user(UserId::new(id).unwrap())
}

/// Returns an administrator caller.
#[allow(dead_code)]
pub fn admin() -> Caller {
    Caller::admin(UserId::new("admin").unwrap())
}

/// Parses a `YYYY-MM-DD` date.
#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Returns the `HH:00` labels of the default window, 09:00 through 18:00.
#[allow(dead_code)]
pub fn window_hours() -> Vec<String> {
    (9..=18).map(|h| format!("{h:02}:00")).collect()
}
