//! Single-operation tool definitions.
//!
//! `add`, `subtract`, `multiply` and `divide` each bind one registry
//! operation and take only the two operands.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{OperandParams, calculation_result};
use crate::domains::calculator::{CalculationResponse, Operation, evaluate};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// A tool bound to exactly one operation.
pub trait ArithmeticTool: Sized + Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// The operation this tool evaluates.
    const OPERATION: Operation;

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    fn execute(params: &OperandParams) -> CallToolResult {
        info!("{} tool called: ({}, {})", Self::NAME, params.a, params.b);
        calculation_result(
            Self::OPERATION,
            params.a,
            params.b,
            evaluate(Self::OPERATION, params.a, params.b),
        )
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: OperandParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        let result = Self::execute(&params);
        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<OperandParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<CalculationResponse>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: OperandParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

/// Add tool - `a + b`.
pub struct AddTool;

impl ArithmeticTool for AddTool {
    const NAME: &'static str = "add";
    const DESCRIPTION: &'static str = "Add two numbers (a + b).";
    const OPERATION: Operation = Operation::Addition;
}

/// Subtract tool - `a - b`.
pub struct SubtractTool;

impl ArithmeticTool for SubtractTool {
    const NAME: &'static str = "subtract";
    const DESCRIPTION: &'static str = "Subtract b from a (a - b).";
    const OPERATION: Operation = Operation::Subtraction;
}

/// Multiply tool - `a * b`.
pub struct MultiplyTool;

impl ArithmeticTool for MultiplyTool {
    const NAME: &'static str = "multiply";
    const DESCRIPTION: &'static str = "Multiply two numbers (a * b).";
    const OPERATION: Operation = Operation::Multiplication;
}

/// Divide tool - `a / b`, rejecting a zero divisor.
pub struct DivideTool;

impl ArithmeticTool for DivideTool {
    const NAME: &'static str = "divide";
    const DESCRIPTION: &'static str = "Divide a by b (a / b). Fails when b is zero.";
    const OPERATION: Operation = Operation::Division;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operands(a: f64, b: f64) -> OperandParams {
        OperandParams { a, b }
    }

    fn result_value(result: &CallToolResult) -> f64 {
        result
            .structured_content
            .as_ref()
            .and_then(|v| v["result"].as_f64())
            .expect("structured result")
    }

    #[test]
    fn test_each_tool_applies_its_operation() {
        assert_eq!(result_value(&AddTool::execute(&operands(5.0, 3.0))), 8.0);
        assert_eq!(result_value(&SubtractTool::execute(&operands(10.0, 3.0))), 7.0);
        assert_eq!(result_value(&MultiplyTool::execute(&operands(5.0, 3.0))), 15.0);
        assert_eq!(result_value(&DivideTool::execute(&operands(10.0, 2.0))), 5.0);
    }

    #[test]
    fn test_divide_by_zero_is_error() {
        let result = DivideTool::execute(&operands(10.0, 0.0));
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_multiply_overflow_keeps_infinity() {
        let result = MultiplyTool::execute(&operands(1e308, 10.0));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "result": "Infinity" }))
        );

        let response: CalculationResponse =
            serde_json::from_value(result.structured_content.unwrap()).unwrap();
        assert_eq!(response.result, f64::INFINITY);
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = DivideTool::to_tool();
        assert_eq!(tool.name, "divide");
        assert!(tool.output_schema.is_some());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_defaults_missing_operand() {
        let result = AddTool::http_handler(serde_json::json!({ "a": 4 })).unwrap();
        assert_eq!(result["structuredContent"]["result"], 4.0);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_rejects_bad_operand() {
        let result = MultiplyTool::http_handler(serde_json::json!({ "a": "four", "b": 2 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
