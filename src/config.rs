use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use crate::logging::LoggingConfig;
use crate::models::RoundingMode;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid HOST '{0}': expected an IP address")]
    InvalidHost(String),
    #[error("Invalid PORT '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
    #[error("{0}")]
    InvalidRoundingMode(String),
    #[error("{0}")]
    Logging(String),
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|o| o.trim().trim_end_matches('/').to_string())
            .filter(|o| !o.is_empty())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub allowed_origins: AllowedOrigins,
    pub rounding_mode: RoundingMode,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            allowed_origins: AllowedOrigins::Any,
            rounding_mode: RoundingMode::default(),
            logging: LoggingConfig::from_lookup(|_| None),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| AllowedOrigins::parse(&raw))
            .unwrap_or(AllowedOrigins::Any);

        let rounding_mode = match lookup("ROUNDING_MODE") {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidRoundingMode)?,
            None => RoundingMode::default(),
        };

        let logging = LoggingConfig::from_lookup(&lookup);
        logging.validate().map_err(ConfigError::Logging)?;

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            allowed_origins,
            rounding_mode,
            logging,
        })
    }
}
