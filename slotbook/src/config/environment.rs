//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SLOTBOOK_*` environment variables
//! that override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::reservation::TransitionPolicy;
use crate::slot::SlotTime;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use slotbook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all `SLOTBOOK_*` configuration variables and applies them with
    /// higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g. a malformed slot time or a non-numeric timeout).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_window_overrides(config)?;

        if let Ok(val) = env::var("SLOTBOOK_TRANSITION_POLICY") {
            let policy: TransitionPolicy = val.parse().map_err(|_| Error::Validation {
                field: "SLOTBOOK_TRANSITION_POLICY".into(),
                message: format!("Invalid policy '{val}' (expected passthrough or forward-only)"),
            })?;
            config.transition_policy = Some(policy);
        }

        if let Ok(seconds) = env::var("SLOTBOOK_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: "SLOTBOOK_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(val) = env::var("SLOTBOOK_OUTPUT_FORMAT") {
            let format: OutputFormat = val.parse().map_err(|message| Error::Validation {
                field: "SLOTBOOK_OUTPUT_FORMAT".into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        if let Ok(val) = env::var("SLOTBOOK_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("SLOTBOOK_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Apply operating window environment variable overrides.
    fn apply_window_overrides(config: &mut Config) -> Result<()> {
        let mut window = config.window.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(first) = env::var("SLOTBOOK_FIRST_SLOT") {
            window.first_slot = Some(Self::parse_slot("SLOTBOOK_FIRST_SLOT", &first)?);
            modified = true;
        }

        if let Ok(last) = env::var("SLOTBOOK_LAST_SLOT") {
            window.last_slot = Some(Self::parse_slot("SLOTBOOK_LAST_SLOT", &last)?);
            modified = true;
        }

        if let Ok(minutes) = env::var("SLOTBOOK_SLOT_MINUTES") {
            window.slot_minutes = Some(minutes.trim().parse().map_err(|_| Error::Validation {
                field: "SLOTBOOK_SLOT_MINUTES".into(),
                message: format!("Invalid slot length '{minutes}'"),
            })?);
            modified = true;
        }

        if modified {
            config.window = Some(window);
        }

        Ok(())
    }

    fn parse_slot(field: &str, s: &str) -> Result<SlotTime> {
        s.parse().map_err(|e: crate::slot::InvalidSlotError| Error::Validation {
            field: field.into(),
            message: e.to_string(),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
