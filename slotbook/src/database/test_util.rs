//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple test modules.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::identity::UserProfile;
use crate::reservation::{GuestInfo, NewReservation, Owner, UserId};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Returns guest contact details used throughout the tests.
#[must_use]
pub fn test_guest() -> GuestInfo {
    GuestInfo::new("Ana Guest", "ana@example.com", "555-0100").unwrap()
}

/// Returns a profile for the given user id.
#[must_use]
pub fn test_profile(id: &str) -> UserProfile {
    UserProfile {
        id: UserId::new(id).unwrap(),
        name: format!("{id} name"),
        email: format!("{id}@example.com"),
        phone: "555-0199".into(),
    }
}

fn request(owner: Owner, date: &str, time: &str) -> NewReservation {
    NewReservation {
        owner,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: time.parse().unwrap(),
        service: "Haircut".into(),
        notes: None,
    }
}

/// Creates a guest booking request for the given slot.
#[must_use]
pub fn guest_request(date: &str, time: &str) -> NewReservation {
    request(Owner::Guest(test_guest()), date, time)
}

/// Creates a registered-user booking request for the given slot.
#[must_use]
pub fn user_request(user: &str, date: &str, time: &str) -> NewReservation {
    request(Owner::RegisteredUser(UserId::new(user).unwrap()), date, time)
}
