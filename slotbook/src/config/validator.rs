//! Configuration validation.
//!
//! This module checks that configured values are usable before the engine
//! is built from them.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::slot::OperatingWindow;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use slotbook::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the operating window does not resolve
    /// to a valid window or the lock timeout is zero.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref window) = config.window {
            if let Some(minutes) = window.slot_minutes {
                if minutes == 0 || minutes > OperatingWindow::MAX_SLOT_MINUTES {
                    return Err(Error::Validation {
                        field: "window.slot_minutes".into(),
                        message: format!(
                            "Slot length must be between 1 and {} minutes",
                            OperatingWindow::MAX_SLOT_MINUTES
                        ),
                    });
                }
            }
        }

        config.operating_window()?;

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }
}
