//! Configuration builder.
//!
//! [`ConfigBuilder`] assembles the final configuration from defaults, the
//! user configuration file, environment variables and programmatic
//! overrides, then validates the result.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder for the layered configuration.
///
/// # Examples
///
/// ```
/// use slotbook::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         maximum_lock_wait_seconds: Some(30),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.maximum_lock_wait_seconds, Some(30));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory holding `config.yaml`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Skips loading configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic override with the highest precedence.
    ///
    /// Multiple overrides are applied in the order they were added.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable is malformed, or the merged configuration
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            ConfigMerger::merge(ConfigLoader::load_all(self.data_dir.as_deref())?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for override_config in &self.overrides {
            ConfigMerger::merge_into(&mut config, override_config);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
