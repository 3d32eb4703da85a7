//! Configuration type definitions

use crate::input::SenderKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input forwarding configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Character sender for soft-keyboard text ("glfw", "awt")
    #[serde(default)]
    pub sender: SenderKind,

    /// Warn instead of trace when a host key has no mapping
    #[serde(default)]
    pub log_unmapped_keys: bool,

    /// Bridge queue depth (0 = unbounded)
    #[serde(default)]
    pub queue_capacity: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format ("pretty", "compact", "json")
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for daily-rotated log files (None = console only)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

/// Game output log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLogConfig {
    /// Log file written on each launch (None = listener only)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Also emit every game line as a tracing event
    #[serde(default = "default_mirror_to_tracing")]
    pub mirror_to_tracing: bool,
}

fn default_mirror_to_tracing() -> bool {
    true
}

impl Default for GameLogConfig {
    fn default() -> Self {
        Self {
            path: None,
            mirror_to_tracing: default_mirror_to_tracing(),
        }
    }
}
