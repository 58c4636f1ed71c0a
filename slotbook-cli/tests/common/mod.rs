//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Parsing helpers for command output

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A separate data directory for the slotbook database
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the slotbook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created yet; slotbook creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("slotbook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Environment variables that would leak settings from the host are
    /// cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("slotbook").expect("Failed to find slotbook binary");
        for var in [
            "SLOTBOOK_DATA_DIR",
            "SLOTBOOK_USER",
            "SLOTBOOK_LOG_MODE",
            "SLOTBOOK_OUTPUT_FORMAT",
            "SLOTBOOK_FIRST_SLOT",
            "SLOTBOOK_LAST_SLOT",
            "SLOTBOOK_SLOT_MINUTES",
            "SLOTBOOK_TRANSITION_POLICY",
            "SLOTBOOK_DISABLE_AUTOINIT",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Book a slot as a guest and return the new reservation id.
    ///
    /// # Panics
    /// Panics if the book command fails or doesn't print an id.
    pub fn book_as_guest(&self, date: &str, time: &str) -> i64 {
        let output = self
            .command()
            .args(["book", "--date", date, "--time", time, "--service", "Haircut"])
            .args(["--guest-name", "Ana", "--guest-email", "ana@example.com"])
            .args(["--guest-phone", "555-0100"])
            .output()
            .expect("Failed to run book command");
        parse_id(&output)
    }

    /// Book a slot as a registered user and return the new reservation id.
    pub fn book_as_user(&self, user: &str, date: &str, time: &str) -> i64 {
        let output = self
            .command()
            .args(["book", "--date", date, "--time", time, "--service", "Haircut"])
            .args(["--user", user])
            .output()
            .expect("Failed to run book command");
        parse_id(&output)
    }

    /// Run `list --format json` as an administrator and parse the output.
    pub fn list_json(&self) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .args(["list", "--format", "json", "--user", "admin", "--admin"])
            .output()
            .expect("Failed to run list command");
        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("List output is not JSON")
    }
}

fn parse_id(output: &std::process::Output) -> i64 {
    assert!(
        output.status.success(),
        "Book failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .expect("Output is not a reservation id")
}
