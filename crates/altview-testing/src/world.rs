//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp directory holding a feed file and an (optional)
//! config file, and points the CLI at them so tests never read the real
//! user configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SAMPLE_FEED_JSON;

/// Fixed clock used by every world so relative dates are reproducible
pub const TEST_NOW: &str = "2023-04-02T09:00:00Z";

/// Isolated CLI test environment.
///
/// # Example
/// ```no_run
/// use altview_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["apps"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    feed_path: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a world whose feed is the sample feed.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let feed_path = temp_dir.path().join("feed.json");
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&feed_path, SAMPLE_FEED_JSON).expect("Failed to write sample feed");

        Self {
            temp_dir,
            feed_path,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn feed_path(&self) -> &Path {
        &self.feed_path
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Replace the feed file contents.
    pub fn with_feed_json(self, json: &str) -> Self {
        std::fs::write(&self.feed_path, json).expect("Failed to write feed");
        self
    }

    /// Write a config file the CLI will pick up.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point a CLI command at this world's feed, config and clock.
    ///
    /// The caller provides the base command (e.g. `Command::cargo_bin("altview")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--feed")
            .arg(&self.feed_path)
            .arg("--now")
            .arg(TEST_NOW)
            .current_dir(self.temp_dir.path())
            .env("ALTVIEW_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the CLI with the given arguments.
    ///
    /// Uses `Command::cargo_bin()`, which requires the `altview` binary to be
    /// built (cargo test does this for the cli crate's tests).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("altview")?;
        self.configure_command(&mut cmd);
        let output = cmd.args(args).output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured output of one CLI run
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
