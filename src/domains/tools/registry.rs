//! Tool Registry - HTTP dispatch for all tools.
//!
//! Name-based dispatch for the HTTP JSON-RPC endpoint. MCP clients on
//! STDIO/TCP go through the `ToolRouter` built in `router.rs`; tool
//! listings come from that router too.

use tracing::warn;

use super::ToolError;
use super::definitions::{
    AddTool, ArithmeticTool, CalculateTool, DivideTool, MultiplyTool, SubtractTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            CalculateTool::NAME => CalculateTool::http_handler(arguments),
            AddTool::NAME => AddTool::http_handler(arguments),
            SubtractTool::NAME => SubtractTool::http_handler(arguments),
            MultiplyTool::NAME => MultiplyTool::http_handler(arguments),
            DivideTool::NAME => DivideTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
