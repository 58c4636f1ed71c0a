//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for slotbook:
//! the operating window, the status transition policy, lock waiting and
//! output preferences.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::reservation::TransitionPolicy;
use crate::slot::{OperatingWindow, SlotTime};

/// Default maximum lock wait, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from different
/// sources can be layered on top of each other.
///
/// # Examples
///
/// ```
/// use slotbook::config::{Config, WindowConfig};
///
/// let config = Config {
///     window: Some(WindowConfig {
///         slot_minutes: Some(30),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// let window = config.operating_window().unwrap();
/// assert_eq!(window.slot_count(), 19);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Daily operating window.
    pub window: Option<WindowConfig>,

    /// Rule applied to status changes.
    pub transition_policy: Option<TransitionPolicy>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Resolves the operating window, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the resulting window is malformed.
    pub fn operating_window(&self) -> Result<OperatingWindow> {
        let defaults = OperatingWindow::default();
        let window = self.window.clone().unwrap_or_default();
        Ok(OperatingWindow::new(
            window.first_slot.unwrap_or(defaults.first()),
            window.last_slot.unwrap_or(defaults.last()),
            window.slot_minutes.unwrap_or(defaults.slot_minutes()),
        )?)
    }

    /// Returns the configured transition policy, or the default.
    #[must_use]
    pub fn transition_policy(&self) -> TransitionPolicy {
        self.transition_policy.unwrap_or_default()
    }

    /// Returns the maximum lock wait as a duration.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }
}

/// Operating window configuration.
///
/// Unset fields fall back to the default 09:00-18:00 hourly window.
///
/// # Examples
///
/// ```
/// use slotbook::config::WindowConfig;
///
/// let yaml = "first_slot: \"08:00\"\nslot_minutes: 30\n";
/// let window: WindowConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(window.first_slot.unwrap().to_string(), "08:00");
/// assert!(window.last_slot.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// First bookable slot of the day.
    pub first_slot: Option<SlotTime>,

    /// Last bookable slot of the day (inclusive).
    pub last_slot: Option<SlotTime>,

    /// Length of each slot in minutes.
    pub slot_minutes: Option<u16>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use slotbook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            other => Err(format!(
                "unknown output format '{other}' (expected json, csv, tsv or table)"
            )),
        }
    }
}
