//! Configuration loading for the `shaker` CLI.
//!
//! Configuration is loaded from a TOML file with the following resolution order:
//! 1. `--config <path>` (CLI flag; must exist)
//! 2. `$CONFIG_DIR/shaker/config.toml` (e.g. `~/.config/shaker/config.toml`)
//! 3. Built-in defaults
//!
//! Every field is optional; a missing section keeps its defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::{ClientConfig, DEFAULT_BASE_URL};
use crate::{Result, ShakerError};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Remote recipe source settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (default: TheCocktailDB v1).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ApiConfig {
    /// Client settings derived from this section.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Returns defaults when no explicit path is given and no user config exists.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ShakerError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ShakerError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, if any.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(ShakerError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        Ok(dirs::config_dir()
            .map(|dir| dir.join("shaker").join("config.toml"))
            .filter(|path| path.exists()))
    }
}
