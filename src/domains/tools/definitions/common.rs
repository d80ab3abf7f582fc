//! Common utilities shared across calculator tools.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domains::calculator::{CalculationResponse, CalculationResult, Operation};

/// Operands shared by every single-operation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OperandParams {
    /// First operand.
    #[serde(default)]
    pub a: f64,

    /// Second operand.
    #[serde(default)]
    pub b: f64,
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Turn the outcome of an evaluation into a tool result.
///
/// Success carries a human-readable summary (`5 + 3 = 8`) plus the
/// `{ "result": n }` payload as structured content.
pub fn calculation_result(
    operation: Operation,
    a: f64,
    b: f64,
    outcome: CalculationResult,
) -> CallToolResult {
    match outcome {
        Ok(value) => {
            info!("{} {} {} = {}", a, operation, b, value);

            let response = CalculationResponse::new(value);
            CallToolResult {
                content: vec![Content::text(format!(
                    "{} {} {} = {}",
                    a, operation, b, value
                ))],
                structured_content: serde_json::to_value(response).ok(),
                is_error: Some(false),
                meta: None,
            }
        }
        Err(e) => error_result(&e.to_string()),
    }
}
