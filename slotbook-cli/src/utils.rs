//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including caller resolution, configuration loading, database management,
//! and output formatting.

use crate::error::CliError;
use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::Args;
use slotbook::database::{resolve_data_dir, DATABASE_FILE_NAME};
use slotbook::{
    Caller, Config, ConfigBuilder, Database, DatabaseConfig, GuestInfo, Identity,
    ReservationEngine, UserId,
};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Identity flags of the person running a command.
///
/// The CLI trusts these flags verbatim; authentication is the business of
/// whatever invokes it.
#[derive(Args, Debug, Clone, Default)]
pub struct CallerArgs {
    /// Act as this registered user
    #[arg(long, value_name = "ID", env = "SLOTBOOK_USER")]
    pub user: Option<String>,

    /// Act with administrator rights
    #[arg(long)]
    pub admin: bool,

    /// Guest name (books without an account)
    #[arg(long, value_name = "NAME", conflicts_with = "user")]
    pub guest_name: Option<String>,

    /// Guest email address
    #[arg(long, value_name = "EMAIL", requires = "guest_name")]
    pub guest_email: Option<String>,

    /// Guest phone number
    #[arg(long, value_name = "PHONE", requires = "guest_name")]
    pub guest_phone: Option<String>,
}

impl CallerArgs {
    /// Builds the caller identity from the flags.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` if neither a user nor a guest is given, or
    /// if a guest claims administrator rights. Incomplete guest details are
    /// reported by the library as a validation error.
    pub fn to_caller(&self) -> Result<Caller, CliError> {
        if let Some(ref user) = self.user {
            let id = UserId::new(user.as_str()).map_err(slotbook::Error::from)?;
            return Ok(Caller::new(Identity::User(id), self.admin));
        }

        if let Some(ref name) = self.guest_name {
            if self.admin {
                return Err(CliError::InvalidArguments(
                    "Guests cannot act as administrators".to_string(),
                ));
            }
            let info = GuestInfo::new(
                name.as_str(),
                self.guest_email.as_deref().unwrap_or_default(),
                self.guest_phone.as_deref().unwrap_or_default(),
            )
            .map_err(slotbook::Error::from)?;
            return Ok(Caller::guest(info));
        }

        Err(CliError::InvalidArguments(
            "Specify --user ID or --guest-name/--guest-email/--guest-phone".to_string(),
        ))
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. `config.yaml` in the data directory
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options.
fn resolve_database_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join(DATABASE_FILE_NAME));
    }

    let data_dir = resolve_data_dir().map_err(|e| CliError::Config(e.to_string()))?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global)?;

    let autoinit_disabled = global.disable_autoinit || config.disable_autoinit.unwrap_or(false);
    if !db_path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    let timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), |secs| Duration::from_secs(secs.into()));
    let db_config = DatabaseConfig::new(db_path).with_busy_timeout(timeout);

    Database::open(db_config).map_err(CliError::from)
}

/// Load configuration, open the database and build an engine over it.
pub fn open_engine(
    global: &GlobalOptions,
) -> Result<(Config, ReservationEngine<Database>), CliError> {
    let config = load_configuration(global)?;
    let db = open_database(global, &config)?;
    let engine = ReservationEngine::from_config(db, &config)
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok((config, engine))
}

/// Parse a date argument.
///
/// Accepts `YYYY-MM-DD` as well as full ISO 8601 timestamps.
pub fn parse_date(input: &str) -> Result<NaiveDate, CliError> {
    slotbook::slot::parse_date(input).map_err(|_| {
        CliError::InvalidArguments(format!("Invalid date '{input}': expected YYYY-MM-DD"))
    })
}

/// Format a timestamp for display in local time.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
