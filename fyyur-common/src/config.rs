//! Configuration loading and resolution
//!
//! The process builds exactly one [`Config`] at startup and hands it to the
//! web layer. Each field is resolved in priority order:
//! 1. Command-line argument (or its environment variable, handled by clap)
//! 2. TOML config file
//! 3. Compiled default

use crate::{Error, Result};
use rand::RngCore;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Port used when nothing else is configured
pub const DEFAULT_PORT: u16 = 5000;

/// Host used when nothing else is configured
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Resolved process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection URL, e.g. `sqlite:///var/lib/fyyur/fyyur.db`
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Key used to sign flash cookies
    pub secret_key: String,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; logs go to stderr as well
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

/// Contents of the optional TOML config file
///
/// Every key is optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

/// Values supplied on the command line (or via their environment variables)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub secret_key: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Merge command-line values, the TOML file and compiled defaults
    pub fn resolve(cli: CliOverrides, file: Option<TomlConfig>) -> Self {
        let file = file.unwrap_or_default();
        let file_logging = file.logging.unwrap_or_default();

        let secret_key = match cli.secret_key.or(file.secret_key) {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                info!("No secret key configured, generated a random one for this process");
                generate_secret_key()
            }
        };

        Self {
            database_url: cli
                .database_url
                .or(file.database_url)
                .unwrap_or_else(default_database_url),
            host: cli
                .host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli.port.or(file.port).unwrap_or(DEFAULT_PORT),
            secret_key,
            logging: LoggingConfig {
                level: cli.log_level.unwrap_or(file_logging.level),
                file: cli.log_file.or(file_logging.file),
            },
        }
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load the TOML config file
///
/// With an explicit path the file must exist. Without one the platform
/// default location is tried, and its absence is not an error.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<Option<TomlConfig>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No config file found, using command line and defaults");
                return Ok(None);
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;

    info!("Loaded config file: {}", path.display());
    Ok(Some(config))
}

/// Platform config file location: `<config_dir>/fyyur/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// SQLite database in the platform data directory
pub fn default_database_url() -> String {
    let path = dirs::data_local_dir()
        .map(|d| d.join("fyyur").join("fyyur.db"))
        .unwrap_or_else(|| PathBuf::from("./fyyur_data/fyyur.db"));
    format!("sqlite://{}", path.display())
}

/// 32 random bytes as 64 hex characters
pub fn generate_secret_key() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
