//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AddTool, ArithmeticTool, CalculateTool, DivideTool, MultiplyTool, SubtractTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CalculateTool::create_route())
        .with_route(AddTool::create_route())
        .with_route(SubtractTool::create_route())
        .with_route(MultiplyTool::create_route())
        .with_route(DivideTool::create_route())
}
