//! Configuration file discovery and loading.
//!
//! This module handles locating and loading the user configuration file
//! from the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the user configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use slotbook::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Some(Path::new("/var/lib/slotbook"))).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files, lowest precedence first.
    ///
    /// If `data_dir` is `None` the resolved default data directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load the user configuration file, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => crate::database::resolve_data_dir()?.join(CONFIG_FILE_NAME),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        log::debug!("loaded configuration from {}", config_path.display());
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Returns the path of the user configuration file for `data_dir`.
    #[must_use]
    pub fn user_config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::TransitionPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "window: [not, a, map").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_all_without_user_config() {
        let temp_dir = TempDir::new().unwrap();
        let sources = ConfigLoader::load_all(Some(temp_dir.path())).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_load_all_with_user_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            ConfigLoader::user_config_path(temp_dir.path()),
            "transition_policy: forward-only\n",
        )
        .unwrap();

        let sources = ConfigLoader::load_all(Some(temp_dir.path())).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(
            sources[0].config.transition_policy,
            Some(TransitionPolicy::ForwardOnly)
        );
    }
}
