//! Transport layer for the calculator server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: REST calculator API plus JSON-RPC over POST - feature: `http`
//! - **STDIO**: MCP over standard input/output - feature: `stdio`
//! - **TCP**: MCP over raw TCP sockets - feature: `tcp`
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the [`CalculatorServer`](crate::core::CalculatorServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub mod rest;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

// Re-export configs for convenience
#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
