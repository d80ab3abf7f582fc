//! Calculate tool definition.
//!
//! Evaluates any registry operation, selected by name or symbol.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{calculation_result, error_result};
use crate::domains::calculator::{CalculationResponse, evaluate_tag};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the calculate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateParams {
    /// Operation name (ADDITION, SUBTRACTION, MULTIPLICATION, DIVISION)
    /// or its symbol (+, -, *, /).
    pub operation: String,

    /// First operand.
    #[serde(default)]
    pub a: f64,

    /// Second operand.
    #[serde(default)]
    pub b: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Calculate tool - evaluates one operation on two operands.
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Evaluate a basic arithmetic operation on two numbers. \
        operation is one of ADDITION, SUBTRACTION, MULTIPLICATION, DIVISION (or +, -, *, /). \
        Division by zero is rejected.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(operation = %params.operation))]
    pub fn execute(params: &CalculateParams) -> CallToolResult {
        info!("Calculate tool called: {} ({}, {})", params.operation, params.a, params.b);

        match evaluate_tag(&params.operation, params.a, params.b) {
            Ok((operation, value)) => calculation_result(operation, params.a, params.b, Ok(value)),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: CalculateParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        info!("Calculate tool (HTTP) called: {}", params.operation);

        let result = Self::execute(&params);

        // Serialize the full CallToolResult to preserve structuredContent
        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CalculateParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<CalculationResponse>().into()),
            icons: None,
            meta: None,
            title: Some("Calculate".into()),
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: CalculateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
