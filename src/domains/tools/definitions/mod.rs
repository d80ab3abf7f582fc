//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod arithmetic;
pub mod calculate;
pub mod common;

pub use arithmetic::{AddTool, ArithmeticTool, DivideTool, MultiplyTool, SubtractTool};
pub use calculate::{CalculateParams, CalculateTool};
pub use common::OperandParams;
