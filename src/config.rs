//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. All configuration is loaded at startup, before any benchmark runs.
//! The benchmark plan itself (sizes and algorithms) is not read from the
//! environment; see [`crate::services::BenchmarkPlan`].

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::constants::{
    log_formats, DEFAULT_DATA_DIR, DEFAULT_LOG_FILTER, DEFAULT_RESULTS_PATH,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// File storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding `test_data_<size>.json`
    pub data_dir: PathBuf,
    /// Where the results array is written
    pub results_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            log_formats::TEXT => Ok(Self::Text),
            log_formats::JSON => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            storage: StorageConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
        }
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            data_dir: non_empty_path("SORTBENCH_DATA_DIR")?.unwrap_or(defaults.data_dir),
            results_path: non_empty_path("SORTBENCH_RESULTS_PATH")?
                .unwrap_or(defaults.results_path),
        })
    }
}

impl LoggingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            format: env::var("LOG_FORMAT")
                .ok()
                .map(|v| v.parse::<LogFormat>())
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Build the subscriber filter from the configured directives
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.rust_log)
            .map_err(|_| ConfigError::InvalidValue("RUST_LOG".to_string()))
    }
}

/// Read a path variable, rejecting a set-but-empty value
fn non_empty_path(key: &str) -> Result<Option<PathBuf>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue(key.to_string())),
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
