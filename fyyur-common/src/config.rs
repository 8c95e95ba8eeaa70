//! Configuration loading
//!
//! Bootstrap settings (database path, bind address, logging) are resolved in
//! priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing config file is not an error; a malformed one is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const ENV_DATABASE: &str = "FYYUR_DATABASE";
pub const ENV_HOST: &str = "FYYUR_HOST";
pub const ENV_PORT: &str = "FYYUR_PORT";
pub const ENV_CONFIG: &str = "FYYUR_CONFIG";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Contents of the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr only if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Resolve configuration from CLI overrides, environment, TOML and defaults
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let config_file = overrides
            .config_file
            .clone()
            .or_else(|| std::env::var(ENV_CONFIG).ok().map(PathBuf::from));

        let toml_config = match &config_file {
            // An explicitly requested file must exist
            Some(path) => load_toml_config(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_toml_config(&path)?,
                Some(path) => {
                    info!("No config file at {}, using defaults", path.display());
                    TomlConfig::default()
                }
                None => {
                    warn!("Could not determine config directory, using defaults");
                    TomlConfig::default()
                }
            },
        };

        let env_port = match std::env::var(ENV_PORT) {
            Ok(raw) => Some(raw.parse::<u16>().map_err(|e| {
                Error::Config(format!("{} must be a port number, got '{}': {}", ENV_PORT, raw, e))
            })?),
            Err(_) => None,
        };

        let database_path = overrides
            .database
            .or_else(|| std::env::var(ENV_DATABASE).ok().map(PathBuf::from))
            .or(toml_config.database_path)
            .unwrap_or_else(default_database_path);

        let host = overrides
            .host
            .or_else(|| std::env::var(ENV_HOST).ok())
            .or(toml_config.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = overrides
            .port
            .or(env_port)
            .or(toml_config.port)
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_path,
            host,
            port,
            logging: toml_config.logging,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
    })?;

    let config = toml::from_str::<TomlConfig>(&content).map_err(|e| {
        Error::Config(format!("Invalid config file {}: {}", path.display(), e))
    })?;

    info!("Loaded config file: {}", path.display());
    Ok(config)
}

/// Per-user config file location (`~/.config/fyyur/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// OS-dependent default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fyyur"))
        .unwrap_or_else(|| PathBuf::from("./fyyur_data"))
        .join("fyyur.db")
}
