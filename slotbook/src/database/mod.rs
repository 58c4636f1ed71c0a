//! Database layer for persistent storage of slot reservations.
//!
//! This module provides a SQLite-based storage layer for reservations and
//! user profiles, including connection management, schema versioning,
//! and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use slotbook::database::{Database, DatabaseConfig};
//! use slotbook::{GuestInfo, NewReservation, Owner};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/slotbook.db")).unwrap();
//!
//! let guest = GuestInfo::new("Ana", "ana@example.com", "555-0100").unwrap();
//! db.insert_reservation(&NewReservation {
//!     owner: Owner::Guest(guest),
//!     date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     time: "10:00".parse().unwrap(),
//!     service: "Haircut".into(),
//!     notes: None,
//! })
//! .unwrap();
//!
//! for reservation in db.list_all_reservations().unwrap() {
//!     println!("{:?}", reservation);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod profiles;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
