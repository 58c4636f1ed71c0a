//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! The operating window is merged field by field so that, for example, an
//! environment override of the slot length keeps the file's first slot.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, WindowConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use slotbook::config::{Config, ConfigMerger};
///
/// let low = Config { maximum_lock_wait_seconds: Some(5), ..Default::default() };
/// let high = Config { maximum_lock_wait_seconds: Some(30), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.maximum_lock_wait_seconds, Some(30));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Window config: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.transition_policy.is_some() {
            target.transition_policy = source.transition_policy;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if let Some(ref source_window) = source.window {
            target.window = Some(match &target.window {
                Some(target_window) => Self::merge_window(target_window, source_window),
                None => source_window.clone(),
            });
        }
    }

    /// Merge window configuration.
    ///
    /// Source values take precedence over target values.
    fn merge_window(target: &WindowConfig, source: &WindowConfig) -> WindowConfig {
        WindowConfig {
            first_slot: source.first_slot.or(target.first_slot),
            last_slot: source.last_slot.or(target.last_slot),
            slot_minutes: source.slot_minutes.or(target.slot_minutes),
        }
    }
}
