//! Calculator server handler.
//!
//! Implements the MCP protocol by delegating to the tools and resources
//! domains, and offers the same operations as plain methods for the HTTP
//! JSON-RPC endpoint.
//!
//! Tools are defined in `domains/tools/definitions/` and the ToolRouter is
//! built in `domains/tools/router.rs`; adding a tool does not touch this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error;
use crate::domains::{resources::ResourceService, tools::build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// The calculator server handler.
///
/// Cheap to clone: every field is shared and immutable.
#[derive(Clone)]
pub struct CalculatorServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl CalculatorServer {
    /// Instructions sent to MCP clients on initialization.
    pub const INSTRUCTIONS: &'static str = "Four-function calculator. Use `calculate` with an \
        operation (ADDITION, SUBTRACTION, MULTIPLICATION, DIVISION) and operands a and b, or \
        the `add`, `subtract`, `multiply` and `divide` tools. Read calculator://operations for \
        the operation registry.";

    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            resource_service: Arc::new(ResourceService::new()),
            tool_router: build_tool_router::<Self>(),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "outputSchema": t.output_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> error::Result<serde_json::Value> {
        Ok(ToolRegistry::new().call_tool(name, arguments)?)
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .await
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> error::Result<serde_json::Value> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": serde_json::to_value(&result.contents)?
        }))
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for CalculatorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_identity() {
        let server = CalculatorServer::new(Config::default());
        assert_eq!(server.name(), "calculator-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_list_tools() {
        let server = CalculatorServer::new(Config::default());
        let tools = server.list_tools();
        assert_eq!(tools.len(), 5);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_info_enables_tools_and_resources() {
        let info = CalculatorServer::new(Config::default()).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_call_tool_unknown_is_tool_error() {
        let server = CalculatorServer::new(Config::default());
        let err = server.call_tool("sqrt", serde_json::json!({})).unwrap_err();
        assert!(matches!(err, crate::core::Error::Tool(_)));
    }

    #[tokio::test]
    async fn test_read_resource_json() {
        let server = CalculatorServer::new(Config::default());
        let json = server.read_resource("calculator://operations").await.unwrap();
        assert_eq!(json["contents"][0]["uri"], "calculator://operations");

        let err = server.read_resource("calculator://missing").await.unwrap_err();
        assert!(matches!(err, crate::core::Error::Resource(_)));
    }
}
