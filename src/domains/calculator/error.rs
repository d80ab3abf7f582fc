//! Calculation error types.

use thiserror::Error;

/// Errors that can occur while evaluating an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Division with a divisor of exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// The operation is unknown or not wired into evaluation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl CalculationError {
    /// Create a new "unsupported operation" error.
    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::UnsupportedOperation(tag.into())
    }

    /// Short machine-readable identifier for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::UnsupportedOperation(_) => "unsupported_operation",
        }
    }
}
