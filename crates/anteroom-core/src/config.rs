//! Configuration management for Anteroom.
//!
//! Loads configuration from ${ANTEROOM_HOME}/config.toml with sensible
//! defaults. The `[timing]` table drives every animation, debounce and
//! simulated-latency duration in the UI.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log file path. Defaults to ${ANTEROOM_HOME}/anteroom.log.
    pub log_file: Option<PathBuf>,

    /// Timing knobs for animations and simulated latency.
    pub timing: TimingConfig,
}

/// Durations (milliseconds) for UI sequencing and simulated work.
///
/// The defaults are the shipped timings; they are configurable mostly
/// so demos can speed them up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Card fade between the credentials and passcode views.
    pub view_fade_ms: u64,
    /// Extra delay before the first passcode cell takes focus.
    pub otp_focus_delay_ms: u64,
    /// Quiet period before the password strength is evaluated.
    pub strength_debounce_ms: u64,
    /// Simulated latency for login / verify / signup submissions.
    pub submit_latency_ms: u64,
    /// Simulated latency for resending a passcode.
    pub resend_latency_ms: u64,
    /// How long the "Sent!" resend feedback stays visible.
    pub resend_label_ms: u64,
    /// Shake feedback on rejected input.
    pub shake_ms: u64,
    /// Success pulse on buttons and passcode cells.
    pub pulse_ms: u64,
    /// Delay between signup success and the switch to the login screen.
    pub redirect_delay_ms: u64,
    /// Card entrance reveal window on screen mount.
    pub entrance_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            view_fade_ms: 200,
            otp_focus_delay_ms: 300,
            strength_debounce_ms: 500,
            submit_latency_ms: 1500,
            resend_latency_ms: 1000,
            resend_label_ms: 2000,
            shake_ms: 500,
            pulse_ms: 200,
            redirect_delay_ms: 1000,
            entrance_ms: 600,
        }
    }
}

impl TimingConfig {
    pub fn view_fade(&self) -> Duration {
        Duration::from_millis(self.view_fade_ms)
    }

    pub fn otp_focus_delay(&self) -> Duration {
        Duration::from_millis(self.otp_focus_delay_ms)
    }

    pub fn strength_debounce(&self) -> Duration {
        Duration::from_millis(self.strength_debounce_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn resend_latency(&self) -> Duration {
        Duration::from_millis(self.resend_latency_ms)
    }

    pub fn resend_label(&self) -> Duration {
        Duration::from_millis(self.resend_label_ms)
    }

    pub fn shake(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn entrance(&self) -> Duration {
        Duration::from_millis(self.entrance_ms)
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the resolved log file path.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| paths::anteroom_home().join("anteroom.log"))
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        let contents = Self::generate()?;
        write_config(path, &contents)
    }

    /// Generates a fresh config TOML from Rust defaults.
    pub fn generate() -> Result<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")
    }
}

/// Writes config content to a file, creating parent directories as needed.
/// Uses atomic write (temp file + rename) to prevent corruption.
fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move config into place at {}", path.display()))?;
    Ok(())
}

pub mod paths {
    //! Path resolution for Anteroom configuration.
    //!
    //! ANTEROOM_HOME resolution order:
    //! 1. ANTEROOM_HOME environment variable (if set)
    //! 2. ~/.config/anteroom (default)

    use std::path::PathBuf;

    /// Returns the Anteroom home directory.
    ///
    /// Checks ANTEROOM_HOME env var first, falls back to ~/.config/anteroom
    pub fn anteroom_home() -> PathBuf {
        if let Ok(home) = std::env::var("ANTEROOM_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("anteroom"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        anteroom_home().join("config.toml")
    }

    /// Returns the user's home directory, if resolvable.
    pub fn home_dir() -> Option<PathBuf> {
        #[cfg(windows)]
        let var = std::env::var("USERPROFILE");
        #[cfg(not(windows))]
        let var = std::env::var("HOME");
        var.ok().map(PathBuf::from)
    }
}
