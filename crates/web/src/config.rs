//! Server configuration, read once at startup from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use shoefront_catalog::RecencyWindow;
use shoefront_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "SHOEFRONT_BIND_ADDR";
pub const CATALOG_PATH_VAR: &str = "SHOEFRONT_CATALOG_PATH";
pub const RECENCY_DAYS_VAR: &str = "SHOEFRONT_RECENCY_DAYS";
pub const LOG_FORMAT_VAR: &str = "SHOEFRONT_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of days (got {value:?})")]
    InvalidRecencyDays { var: &'static str, value: String },

    #[error("{var} must be `json` or `pretty` (got {value:?})")]
    InvalidLogFormat { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog to serve. `None` serves the built-in demo catalog.
    pub catalog_path: Option<PathBuf>,
    pub recency_window: RecencyWindow,
    pub log_format: LogFormat,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
            })?;

        let catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let recency_window = match lookup(RECENCY_DAYS_VAR) {
            None => RecencyWindow::default(),
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|days| RecencyWindow::days(days).ok())
                .ok_or(ConfigError::InvalidRecencyDays {
                    var: RECENCY_DAYS_VAR,
                    value: raw,
                })?,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                value: raw.clone(),
            })?,
        };

        Ok(Self {
            bind_addr,
            catalog_path,
            recency_window,
            log_format,
        })
    }
}
