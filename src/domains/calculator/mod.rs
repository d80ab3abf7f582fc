//! Calculator domain module.
//!
//! The arithmetic core of the server. Transports and tools decode their
//! payloads into an [`Operation`] and two operands, call [`evaluate`], and
//! encode either the value or the [`CalculationError`].
//!
//! ## Architecture
//!
//! - `operation.rs` - Operation registry (names, symbols, lookup)
//! - `engine.rs` - Pure evaluation functions
//! - `model.rs` - Request/response payloads
//! - `error.rs` - Calculation error types

pub mod engine;
mod error;
pub mod model;
mod operation;

pub use engine::{CalculationResult, evaluate, evaluate_tag};
pub use error::CalculationError;
pub use model::{CalculationRequest, CalculationResponse};
pub use operation::Operation;
