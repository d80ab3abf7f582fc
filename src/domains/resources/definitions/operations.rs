//! Operation registry resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::domains::calculator::Operation;
use crate::domains::resources::service::ResourceContent;

/// Lists every registry operation with its symbol and evaluation support.
pub struct OperationsResource;

/// One entry of the operations listing.
#[derive(Debug, Serialize)]
pub struct OperationEntry {
    pub name: &'static str,
    pub symbol: &'static str,
    pub supported: bool,
}

impl OperationsResource {
    /// Build the listing from the operation registry.
    pub fn entries() -> Vec<OperationEntry> {
        Operation::ALL
            .into_iter()
            .map(|op| OperationEntry {
                name: op.name(),
                symbol: op.symbol(),
                supported: op.is_supported(),
            })
            .collect()
    }

    /// Render the listing as pretty JSON.
    pub fn render() -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::entries())
    }
}

impl ResourceDefinition for OperationsResource {
    const URI: &'static str = "calculator://operations";
    const NAME: &'static str = "Calculator Operations";
    const DESCRIPTION: &'static str =
        "Operations known to the calculator, their symbols, and whether they can be evaluated";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::OperationRegistry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_metadata() {
        assert_eq!(OperationsResource::URI, "calculator://operations");
        assert_eq!(OperationsResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_operations_listing() {
        let json: serde_json::Value =
            serde_json::from_str(&OperationsResource::render().unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0]["name"], "ADDITION");
        assert_eq!(entries[0]["symbol"], "+");
        assert_eq!(entries[4]["name"], "EXPONENTIAL");
        assert_eq!(entries[4]["supported"], false);
    }
}
