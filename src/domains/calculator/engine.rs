//! Calculator engine.
//!
//! Pure evaluation of a single binary operation. Nothing here performs I/O,
//! logs, or holds state, so every function may be called from any number of
//! tasks at once.

use super::error::CalculationError;
use super::operation::Operation;

/// Result type for calculator operations.
pub type CalculationResult<T = f64> = Result<T, CalculationError>;

/// Evaluate `operation` against operands `a` and `b`.
///
/// Non-finite operands are not rejected and propagate per IEEE-754. Division
/// fails when `b == 0.0` (exact comparison, so `-0.0` is rejected too).
/// Operations that are in the registry but not wired into evaluation fail with
/// [`CalculationError::UnsupportedOperation`].
pub fn evaluate(operation: Operation, a: f64, b: f64) -> CalculationResult {
    match operation {
        Operation::Addition => Ok(add(a, b)),
        Operation::Subtraction => Ok(subtract(a, b)),
        Operation::Multiplication => Ok(multiply(a, b)),
        Operation::Division => divide(a, b),
        Operation::Exponential => Err(CalculationError::unsupported(operation.name())),
    }
}

/// Resolve a wire tag (name or symbol) and evaluate it, returning the
/// resolved operation with the value.
pub fn evaluate_tag(tag: &str, a: f64, b: f64) -> CalculationResult<(Operation, f64)> {
    let operation: Operation = tag.parse()?;
    evaluate(operation, a, b).map(|value| (operation, value))
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> CalculationResult {
    if b == 0.0 {
        return Err(CalculationError::DivisionByZero);
    }
    Ok(a / b)
}
