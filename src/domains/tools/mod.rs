//! Tools domain module.
//!
//! Tools are the MCP face of the calculator: each one decodes its
//! arguments, calls the calculator engine and wraps the outcome in a
//! `CallToolResult`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Name-based dispatch for the HTTP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (or implement `ArithmeticTool`)
//! 2. Export in `definitions/mod.rs`
//! 3. Add route in `router.rs` using `with_route()`
//! 4. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
#[cfg(feature = "http")]
mod registry;
pub mod router;

pub use error::ToolError;
#[cfg(feature = "http")]
pub use registry::ToolRegistry;
pub use router::build_tool_router;
