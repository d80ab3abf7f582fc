//! Domains module containing business logic organized by bounded contexts.
//!
//! - **calculator**: operation registry and the pure evaluation engine
//! - **tools**: MCP tools wrapping the calculator
//! - **resources**: read-only data published to MCP clients

pub mod calculator;
pub mod resources;
pub mod tools;
