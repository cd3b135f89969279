//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! The server owns an immutable [`ToolRegistry`] built once at startup.
//! Both transports dispatch through it: STDIO via the `ServerHandler`
//! implementation below, HTTP via the inherent methods.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::{
    prompts::{PromptError, PromptService},
    resources::{ResourceError, ResourceService},
    tools::{ToolError, ToolRegistry, build_tool_registry},
};

/// The main MCP server handler.
///
/// Cloning is cheap; all state is behind `Arc` and never mutated.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools.
    tools: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if two tools are registered under the same name.
    pub fn new(config: Config) -> Result<Self> {
        let tools = build_tool_registry(&config)?;
        info!("Registered {} tool(s)", tools.len());

        Ok(Self {
            config: Arc::new(config),
            tools: Arc::new(tools),
            resource_service: Arc::new(ResourceService::new()),
            prompt_service: Arc::new(PromptService::new()),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    // ========================================================================
    // Transport-neutral operations
    // ========================================================================

    /// All tools, in registration order.
    pub fn list_tool_models(&self) -> Vec<Tool> {
        self.tools.tools()
    }

    /// Call a tool by name.
    pub async fn invoke_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> std::result::Result<CallToolResult, ToolError> {
        let outcome = self.tools.call(name, arguments).await?;
        Ok(outcome.into_call_result())
    }

    /// List all available resources.
    pub async fn list_resource_models(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    /// Read a resource by URI.
    pub async fn read_resource_contents(
        &self,
        uri: &str,
    ) -> std::result::Result<ReadResourceResult, ResourceError> {
        self.resource_service.read_resource(uri).await
    }

    /// List all available prompts.
    pub async fn list_prompt_models(&self) -> Vec<Prompt> {
        self.prompt_service.list_prompts().await
    }

    /// Render a prompt with the given arguments.
    pub async fn render_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> std::result::Result<GetPromptResult, PromptError> {
        self.prompt_service.get_prompt(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.name().to_string();
        server_info.version = self.version().to_string();

        ServerInfo {
            instructions: Some(self.config.server.instructions.clone()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info,
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.list_tool_models(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.invoke_tool(&request.name, request.arguments.unwrap_or_default())
            .await
            .map_err(McpError::from)
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.list_resource_models().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.read_resource_contents(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: self.list_prompt_models().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        // Convert serde_json::Map to HashMap<String, String>
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.render_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_get_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "mcp-hello");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
    }

    #[tokio::test]
    async fn test_invoke_say_hello_multiple() {
        let result = server()
            .invoke_tool(
                "say_hello_multiple",
                args(serde_json::json!({ "names": ["A", "B"] })),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        match &result.content[0].raw {
            RawContent::Text(text) => {
                assert_eq!(text.text, "• 안녕하세요, A님!\n• 안녕하세요, B님!");
            }
            other => panic!("Expected text content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_forecast_without_key_is_tool_error() {
        let result = server()
            .invoke_tool(
                "get_tour_weather_forecast",
                args(serde_json::json!({ "current_date": "20240101", "hour": 9, "course_id": 1 })),
            )
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result.structured_content.unwrap()["error"].is_string());
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool() {
        let err = server()
            .invoke_tool("missing", JsonObject::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_concurrent_invocations() {
        let server = server();
        let calls = (0..16).map(|i| {
            let server = server.clone();
            tokio::spawn(async move {
                server
                    .invoke_tool(
                        "say_hello",
                        args(serde_json::json!({ "name": format!("user{i}") })),
                    )
                    .await
            })
        });
        for handle in calls.collect::<Vec<_>>() {
            let result = handle.await.unwrap().unwrap();
            assert_eq!(result.is_error, Some(false));
        }
    }
}
