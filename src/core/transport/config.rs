//! Transport configuration types.

use serde::{Deserialize, Serialize};

#[cfg(any(feature = "tcp", feature = "http"))]
use crate::core::config::env_parse_or;
#[cfg(feature = "http")]
use crate::core::config::env_flag;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (MCP only).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with MCP JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// HTTP transport with the REST calculator API and JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Base path for the REST calculator endpoints.
    #[serde(default = "default_rest_path")]
    pub rest_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_rest_path() -> String {
    "/api/calculator".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "http"), not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            rpc_path: default_rpc_path(),
            rest_path: default_rest_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("CALC_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => {
                let port = env_parse_or("CALC_TCP_PORT", 3000);
                let host = std::env::var("CALC_TCP_HOST").unwrap_or_else(|_| default_host());
                Self::Tcp(TcpConfig { port, host })
            }
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            other => {
                if !other.is_empty() {
                    tracing::warn!("Unknown or disabled transport {:?}, using default", other);
                }
                #[cfg(feature = "http")]
                {
                    Self::Http(HttpConfig::from_env())
                }
                #[cfg(not(feature = "http"))]
                {
                    Self::default()
                }
            }
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (MCP over stdin/stdout)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!(
                "HTTP on {}:{} (REST {}, JSON-RPC {})",
                cfg.host, cfg.port, cfg.rest_path, cfg.rpc_path
            ),
        }
    }

    /// Reject settings the transport would fail on at startup.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            #[cfg(feature = "http")]
            Self::Http(cfg) => cfg.validate(),
            #[allow(unreachable_patterns)]
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Load HTTP settings from `CALC_HTTP_*` variables.
    pub fn from_env() -> Self {
        Self {
            port: env_parse_or("CALC_HTTP_PORT", 8080),
            host: std::env::var("CALC_HTTP_HOST").unwrap_or_else(|_| default_host()),
            rpc_path: std::env::var("CALC_HTTP_PATH").unwrap_or_else(|_| default_rpc_path()),
            rest_path: std::env::var("CALC_HTTP_REST_PATH")
                .unwrap_or_else(|_| default_rest_path()),
            enable_cors: env_flag("CALC_HTTP_CORS").unwrap_or_else(default_cors),
        }
    }

    /// Route paths must be absolute, literal, distinct, and not shadow the
    /// fixed routes.
    pub fn validate(&self) -> Result<(), String> {
        for (label, path) in [("rpc_path", &self.rpc_path), ("rest_path", &self.rest_path)] {
            if !path.starts_with('/') || path.len() < 2 {
                return Err(format!("{} must start with '/' and not be the root: {:?}", label, path));
            }
            if path.ends_with('/') {
                return Err(format!("{} must not end with '/': {:?}", label, path));
            }
            if path.contains(['{', '}', '*']) {
                return Err(format!(
                    "{} must be a literal path without parameters or wildcards: {:?}",
                    label, path
                ));
            }
            if path == "/health" {
                return Err(format!("{} must not be /health", label));
            }
        }
        if is_segment_prefix(&self.rpc_path, &self.rest_path)
            || is_segment_prefix(&self.rest_path, &self.rpc_path)
        {
            return Err(format!(
                "rpc_path {:?} and rest_path {:?} overlap",
                self.rpc_path, self.rest_path
            ));
        }
        Ok(())
    }
}

/// Whether `path` equals `prefix` or lies beneath it, compared by segment.
#[cfg(feature = "http")]
fn is_segment_prefix(prefix: &str, path: &str) -> bool {
    let mut segments = path.split('/');
    prefix.split('/').all(|segment| segments.next() == Some(segment))
}
