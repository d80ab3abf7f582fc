//! Configuration management for the calculator server.
//!
//! This module provides a centralized configuration structure populated from
//! defaults and then environment variables (prefixed with `CALC_`).

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the calculator server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "calculator-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// For example: `CALC_SERVER_NAME`, `CALC_LOG_LEVEL`, `CALC_TRANSPORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("CALC_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("CALC_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(with_timestamps) = env_flag("CALC_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = with_timestamps;
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Check the configuration for values the transports cannot serve.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }
        self.transport.validate().map_err(Error::config)
    }
}

/// Read a boolean flag; `false` and `0` disable, anything else enables.
pub(crate) fn env_flag(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|v| v.to_lowercase() != "false" && v != "0")
}

/// Read and parse a variable, falling back to `default` when it is unset
/// or does not parse.
#[cfg(any(feature = "tcp", feature = "http"))]
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("CALC_SERVER_NAME", "calc-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "calc-test");
        unsafe {
            std::env::remove_var("CALC_SERVER_NAME");
        }
    }

    #[test]
    fn test_log_timestamps_flag() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("CALC_LOG_TIMESTAMPS", "0");
        }
        let config = Config::from_env();
        assert!(!config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("CALC_LOG_TIMESTAMPS");
        }
    }

    #[cfg(any(feature = "tcp", feature = "http"))]
    #[test]
    fn test_env_parse_or_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("CALC_TEST_PORT", "not-a-port");
        }
        assert_eq!(env_parse_or::<u16>("CALC_TEST_PORT", 8080), 8080);
        unsafe {
            std::env::set_var("CALC_TEST_PORT", "9090");
        }
        assert_eq!(env_parse_or::<u16>("CALC_TEST_PORT", 8080), 9090);
        unsafe {
            std::env::remove_var("CALC_TEST_PORT");
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let mut config = Config::default();
        config.server.name = "  ".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
