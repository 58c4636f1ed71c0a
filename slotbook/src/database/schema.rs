//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the slotbook store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Exactly one of `user_id` and the guest columns is populated. The
/// `(date, time)` pair carries a UNIQUE constraint so that two concurrent
/// inserts for one slot cannot both succeed.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id TEXT,
        guest_name TEXT,
        guest_email TEXT,
        guest_phone TEXT,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        starts_at TEXT NOT NULL,
        service TEXT NOT NULL,
        notes TEXT,
        status TEXT NOT NULL DEFAULT 'Pending',
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL,
        UNIQUE (date, time),
        CHECK ((user_id IS NULL) <> (guest_name IS NULL))
    )";

/// SQL statement to create the user profile table.
///
/// There is deliberately no foreign key from reservations; removing a
/// profile leaves its reservations in place.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL
    )";

/// SQL statement to create an index on the `starts_at` column.
///
/// This index speeds up ordered listings and day range scans.
pub const CREATE_STARTS_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_starts_at ON reservations(starts_at)";

/// SQL statement to create an index on the `user_id` column.
///
/// This index speeds up per-user listings.
pub const CREATE_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
///
/// Plain `INSERT` so that a slot conflict surfaces as a constraint violation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (user_id, guest_name, guest_email, guest_phone, date, time, starts_at,
     service, notes, status, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to delete a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

/// Column list shared by every reservation query, in `row_to_reservation` order.
pub const RESERVATION_COLUMNS: &str = "id, user_id, guest_name, guest_email, guest_phone, \
     date, time, service, notes, status, created_at, updated_at";
