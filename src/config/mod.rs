//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{GameLogConfig, InputConfig, LoggingConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input forwarding configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Game output log configuration
    #[serde(default)]
    pub game_log: GameLogConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Create default configuration
    pub fn default_config() -> Result<Self> {
        Ok(Config {
            input: InputConfig::default(),
            logging: LoggingConfig::default(),
            game_log: GameLogConfig::default(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        if let Some(path) = &self.game_log.path {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Game log path is empty");
            }
            if path.is_dir() {
                anyhow::bail!("Game log path is a directory: {:?}", path);
            }
        }

        Ok(())
    }

    /// Override config with CLI arguments
    ///
    /// `verbose` raises the log level (1 = debug, 2+ = trace) and never
    /// lowers it.
    pub fn with_overrides(
        mut self,
        verbose: u8,
        log_format: Option<String>,
        game_log: Option<PathBuf>,
    ) -> Self {
        match verbose {
            0 => {}
            1 if self.logging.level != "trace" => self.logging.level = "debug".to_string(),
            1 => {}
            _ => self.logging.level = "trace".to_string(),
        }

        if let Some(format) = log_format {
            self.logging.format = format;
        }

        if let Some(path) = game_log {
            self.game_log.path = Some(path);
        }

        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config().expect("Failed to create default config")
    }
}
