//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`BACKPRACT_*`)
//! 2. Config file (`~/.backpract/config.toml`)
//! 3. Defaults

use crate::error::{Error, Result};
use crate::executor::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Execution service configuration.
    pub executor: ExecutorConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the storage document.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_backpract_home(),
        }
    }
}

/// Execution service configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Base URL; `/execute` and `/runtimes` are appended.
    pub base_url: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"debug"` or `"backpract=trace"`.
    pub filter: String,

    /// Emit JSON lines instead of human-readable logs.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

/// Get the default backpract home directory.
fn default_backpract_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".backpract"), |h| h.join(".backpract"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    let config_path = get_config_path();
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path).map_err(Error::Storage)?;
        config = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("BACKPRACT_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("BACKPRACT_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_backpract_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(path) = env::var("BACKPRACT_STORAGE_PATH") {
        config.storage.path = PathBuf::from(path);
    } else if let Ok(home) = env::var("BACKPRACT_HOME") {
        config.storage.path = PathBuf::from(home);
    }

    if let Ok(url) = env::var("BACKPRACT_EXECUTOR_URL") {
        config.executor.base_url = url;
    }

    if let Ok(filter) = env::var("BACKPRACT_LOG") {
        config.logging.filter = filter;
    }

    if let Ok(val) = env::var("BACKPRACT_LOG_JSON") {
        config.logging.json = val == "1" || val.eq_ignore_ascii_case("true");
    }
}
