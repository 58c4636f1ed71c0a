//! Logging infrastructure for the slotbook library.
//!
//! The library emits records through the `log` facade. This module provides
//! a simple stderr backend for it with three verbosity levels.

use std::env;
use std::fmt;

use log::{LevelFilter, Metadata, Record};

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use slotbook::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// Returns the `log` filter corresponding to this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A simple stderr-based `log` backend.
///
/// The logger only outputs records at or above its configured level.
///
/// # Examples
///
/// ```
/// use log::Log;
/// use slotbook::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// let info = log::Metadata::builder().level(log::Level::Info).build();
/// assert!(!logger.enabled(&info));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Resolves the effective log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `SLOTBOOK_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
#[must_use]
pub fn resolve_log_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    if let Ok(env_value) = env::var("SLOTBOOK_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return level;
        }
    }

    LogLevel::Normal
}

/// Installs the stderr [`Logger`] as the global `log` backend.
///
/// The level is chosen by [`resolve_log_level`]. If a global logger is
/// already installed only the maximum level is updated.
///
/// # Examples
///
/// ```
/// use slotbook::{init_logger, LogLevel};
///
/// let level = init_logger(false, true);
/// assert_eq!(level, LogLevel::Quiet);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_log_level(verbose, quiet);
    let logger: &'static Logger = Box::leak(Box::new(Logger::new(level)));
    // Already installed
    let _ = log::set_logger(logger);
    log::set_max_level(level.filter());
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    fn metadata(level: log::Level) -> Metadata<'static> {
        Metadata::builder().level(level).build()
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("QUIET").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("verbose").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_enabled_by_level() {
        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&metadata(log::Level::Error)));

        let normal = Logger::default();
        assert!(normal.enabled(&metadata(log::Level::Error)));
        assert!(normal.enabled(&metadata(log::Level::Warn)));
        assert!(!normal.enabled(&metadata(log::Level::Info)));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(&metadata(log::Level::Debug)));
        assert!(!verbose.enabled(&metadata(log::Level::Trace)));
    }

    #[test]
    fn test_resolve_flags_take_precedence() {
        assert_eq!(resolve_log_level(true, false), LogLevel::Verbose);
        assert_eq!(resolve_log_level(false, true), LogLevel::Quiet);
        assert_eq!(resolve_log_level(true, true), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_resolve_from_env() {
        env::set_var("SLOTBOOK_LOG_MODE", "verbose");
        assert_eq!(resolve_log_level(false, false), LogLevel::Verbose);

        env::set_var("SLOTBOOK_LOG_MODE", "invalid");
        assert_eq!(resolve_log_level(false, false), LogLevel::Normal);

        env::set_var("SLOTBOOK_LOG_MODE", "normal");
        assert_eq!(resolve_log_level(true, false), LogLevel::Verbose);

        env::remove_var("SLOTBOOK_LOG_MODE");
        assert_eq!(resolve_log_level(false, false), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_sets_max_level() {
        let level = init_logger(false, true);
        assert_eq!(level, LogLevel::Quiet);
        assert_eq!(log::max_level(), LevelFilter::Off);
    }
}
