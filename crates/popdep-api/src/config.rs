//! # Service Configuration
//!
//! Read once from the environment at startup. Every value has a default,
//! so a bare `popdep-api` run serves `data/estim-pop-dep-2023.csv` on
//! `127.0.0.1:8000` for a front-end on `http://localhost:3000`.
//!
//! | Variable             | Default                         |
//! |----------------------|---------------------------------|
//! | `HOST`               | `127.0.0.1`                     |
//! | `PORT`               | `8000`                          |
//! | `POPDEP_DATA_PATH`   | `data/estim-pop-dep-2023.csv`   |
//! | `POPDEP_CORS_ORIGIN` | `http://localhost:3000`         |
//! | `POPDEP_LOG_FORMAT`  | `text` (or `json`)              |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_PATH: &str = "data/estim-pop-dep-2023.csv";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Invalid configuration value.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },

    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },

    #[error("invalid POPDEP_CORS_ORIGIN {value:?}: not a valid header value")]
    InvalidOrigin { value: String },

    #[error("invalid POPDEP_LOG_FORMAT {value:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat { value: String },
}

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
    /// Population CSV loaded at startup.
    pub data_path: PathBuf,
    /// The single origin allowed to make credentialed cross-origin calls.
    pub cors_origin: HeaderValue,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset and blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("HOST") {
            config.host = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value })?;
        }

        if let Some(value) = get("PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?;
        }

        if let Some(value) = get("POPDEP_DATA_PATH") {
            config.data_path = PathBuf::from(value);
        }

        if let Some(value) = get("POPDEP_CORS_ORIGIN") {
            config.cors_origin = HeaderValue::from_str(value.trim())
                .map_err(|_| ConfigError::InvalidOrigin { value })?;
        }

        if let Some(value) = get("POPDEP_LOG_FORMAT") {
            config.log_format = match value.trim().to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::InvalidLogFormat { value }),
            };
        }

        Ok(config)
    }

    /// Socket address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
