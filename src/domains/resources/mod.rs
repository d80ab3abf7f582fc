//! Resources domain module.
//!
//! Resources are read-only data published to MCP clients. The calculator
//! publishes its operation registry so clients can discover which
//! operations exist and which of them evaluate.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::get_all_resources;
pub use service::{ResourceContent, ResourceEntry, ResourceService};
