//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use tracing::{debug, info};

use super::definitions::OperationsResource;
use super::error::ResourceError;
use super::registry::get_all_resources;

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Key: resource URI, Value: resource metadata and content.
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Content providers, resolved on every read.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Listing of the calculator's operation registry.
    OperationRegistry,
}

impl ResourceService {
    /// Create a new ResourceService populated from the registry.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: HashMap::new(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = Self::resolve_content(uri, &entry.content)?;

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    fn resolve_content(
        uri: &str,
        content: &ResourceContent,
    ) -> Result<ResourceContents, ResourceError> {
        match content {
            ResourceContent::OperationRegistry => {
                let listing = OperationsResource::render()
                    .map_err(|e| ResourceError::internal(e.to_string()))?;
                Ok(ResourceContents::text(listing, uri))
            }
        }
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);
    }

    #[tokio::test]
    async fn test_read_operations_resource() {
        let service = ResourceService::new();
        let result = service.read_resource("calculator://operations").await.unwrap();
        assert_eq!(result.contents.len(), 1);

        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.contains("DIVISION"));
                assert!(text.contains("^^"));
            }
            other => panic!("Expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new();
        let result = service.read_resource("calculator://history").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
