//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for concurrent `SQLite` access.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// A database connection wrapper with configuration.
///
/// Each `Database` owns a single `SQLite` connection. Concurrent callers,
/// whether threads or processes, open their own `Database` on the same
/// file; WAL mode plus the busy timeout serialize their writes.
///
/// # Examples
///
/// ```no_run
/// use slotbook::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/slotbook.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode for concurrent access
    /// - Configure busy timeout
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file does not exist and `auto_create` is disabled
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        if !config.auto_create && !config.path.exists() {
            return Err(Error::NotFound {
                resource: format!("database {}", config.path.display()),
            });
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a row
        if !config.read_only {
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        }
        conn.busy_timeout(config.busy_timeout)?;

        super::migrations::check_schema_compatibility(&conn)?;

        log::debug!("opened database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    ///
    /// This provides access to the raw connection for advanced operations.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Verifies database integrity using PRAGMA `integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrity check fails or detects corruption.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use slotbook::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/slotbook.db")).unwrap();
    /// db.verify_integrity().unwrap();
    /// ```
    pub fn verify_integrity(&self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("integrity check failed: {result}"),
            })
        }
    }
}
