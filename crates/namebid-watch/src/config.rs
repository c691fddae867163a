//! Configuration file management.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "namebid.toml";

/// Complete watcher configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Polling settings.
    #[serde(default)]
    pub poll: PollConfig,
    /// Auction feed settings.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Milliseconds between evaluations.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Exit once every auction in the feed has closed.
    #[serde(default = "default_true")]
    pub stop_when_finished: bool,
}

/// Auction feed configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    /// JSON file of auction records. Empty = must be given on the command line.
    #[serde(default)]
    pub path: String,
    /// Drop records that fail validation instead of refusing the whole feed.
    #[serde(default)]
    pub skip_invalid: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level: "trace" | "debug" | "info" | "warn" | "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            stop_when_finished: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl WatchConfig {
    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`].
    ///
    /// Falls back to defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        let config: WatchConfig = toml::from_str(&content)
            .with_context(|| format!("parsing {}", config_path.display()))?;
        if config.poll.interval_ms == 0 {
            anyhow::bail!("poll.interval_ms must be non-zero");
        }
        Ok(config)
    }

    /// Feed path from config, if set.
    pub fn feed_path(&self) -> Option<PathBuf> {
        if self.feed.path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.feed.path))
        }
    }
}
