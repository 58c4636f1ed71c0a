//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Name of the database file inside the data directory.
pub const DATABASE_FILE_NAME: &str = "slotbook.db";

/// Configuration for database connections.
///
/// This struct contains all parameters needed to open and configure
/// a database connection, including the database file path, timeout
/// settings, and access modes.
///
/// # Examples
///
/// ```
/// use slotbook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/slotbook.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the database connection will
    /// wait when encountering a locked database before returning an error.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Disables creation of a missing database file.
    #[must_use]
    pub const fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/slotbook.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory for slotbook.
///
/// The default directory is `~/.slotbook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "cannot determine home directory".into(),
    })?;
    Ok(home.join(".slotbook"))
}

/// Resolves the data directory using the environment or defaults.
///
/// The resolution order is:
/// 1. `$SLOTBOOK_DATA_DIR` if set and non-empty
/// 2. `~/.slotbook` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `SLOTBOOK_DATA_DIR` is not set.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var("SLOTBOOK_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the database path inside the resolved data directory.
///
/// # Errors
///
/// Returns an error if the data directory cannot be resolved.
///
/// # Examples
///
/// ```no_run
/// use slotbook::database::resolve_database_path;
///
/// let db_path = resolve_database_path().unwrap();
/// println!("Database path: {}", db_path.display());
/// ```
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_with_busy_timeout() {
        let config =
            DatabaseConfig::new("/tmp/test.db").with_busy_timeout(Duration::from_millis(10000));
        assert_eq!(config.busy_timeout, Duration::from_millis(10000));
    }

    #[test]
    fn test_config_read_only() {
        let config = DatabaseConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    fn test_config_without_auto_create() {
        let config = DatabaseConfig::new("/tmp/test.db").without_auto_create();
        assert!(!config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_default_data_dir() {
        if let Ok(dir) = default_data_dir() {
            assert!(dir.ends_with(".slotbook"));
        }
    }

    #[test]
    #[serial]
    fn test_resolve_database_path() {
        std::env::set_var("SLOTBOOK_DATA_DIR", "/custom/data");
        let path = resolve_database_path().unwrap();
        assert_eq!(path, PathBuf::from("/custom/data/slotbook.db"));

        std::env::remove_var("SLOTBOOK_DATA_DIR");
        if let Ok(path) = resolve_database_path() {
            assert!(path.ends_with(".slotbook/slotbook.db"));
        }
    }
}
