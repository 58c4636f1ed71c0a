//! Configuration system for slotbook.
//!
//! This module provides hierarchical configuration with support for:
//! - A YAML user configuration file (`<data_dir>/config.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SLOTBOOK_*`)
//! 3. User config (`~/.slotbook/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use slotbook::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let window = config.operating_window().unwrap();
//! println!("Open {window}");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, WindowConfig};
pub use validator::ConfigValidator;
