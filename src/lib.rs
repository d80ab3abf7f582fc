//! Calculator Server Library
//!
//! A four-function calculator (addition, subtraction, multiplication,
//! division) served over HTTP as a REST API and over the Model Context
//! Protocol (MCP) as tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **calculator**: operation registry and the pure evaluation engine
//!   - **tools**: MCP tools wrapping the calculator
//!   - **resources**: the operation registry published as an MCP resource
//!
//! # Example
//!
//! ```rust
//! use calculator_server::domains::calculator::{CalculationError, Operation, evaluate};
//!
//! assert_eq!(evaluate(Operation::Addition, 5.0, 3.0), Ok(8.0));
//! assert_eq!(
//!     evaluate(Operation::Division, 10.0, 0.0),
//!     Err(CalculationError::DivisionByZero)
//! );
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{CalculatorServer, Config, Error, Result};
pub use domains::calculator::{CalculationError, Operation, evaluate};
