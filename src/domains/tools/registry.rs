//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The [`ToolDefinition`] trait every tool implements
//! - [`ToolDescriptor`], the type-erased registry entry
//! - [`ToolRegistry`], shared by the STDIO and HTTP transports
//!
//! The registry is populated once at startup and never mutated afterwards,
//! so it can be shared behind an `Arc` without locking.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::error::ToolError;
use super::outcome::InvocationResult;

/// Trait implemented by every tool.
///
/// `Params` is the typed parameter struct. Incoming arguments are
/// deserialized into it before `call` runs, so handlers never see
/// malformed input.
#[async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed parameters accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Execute the tool.
    async fn call(&self, params: Self::Params) -> InvocationResult;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

type ErasedHandler =
    Arc<dyn Fn(JsonObject) -> Result<BoxFuture<'static, InvocationResult>, ToolError> + Send + Sync>;

/// A registered tool: its metadata plus a type-erased handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    tool: Tool,
    handler: ErasedHandler,
}

impl ToolDescriptor {
    /// Wrap a tool definition into a descriptor.
    pub fn new<T: ToolDefinition>(definition: T) -> Self {
        let definition = Arc::new(definition);
        let handler: ErasedHandler = Arc::new(move |arguments: JsonObject| {
            let params: T::Params =
                serde_json::from_value(serde_json::Value::Object(arguments))
                    .map_err(|e| ToolError::invalid_arguments(T::NAME, e.to_string()))?;
            let definition = definition.clone();
            Ok(async move { definition.call(params).await }.boxed())
        });

        Self {
            tool: T::to_tool(),
            handler,
        }
    }

    /// The unique tool name.
    pub fn name(&self) -> &str {
        &self.tool.name
    }

    /// The tool description, if any.
    pub fn description(&self) -> Option<&str> {
        self.tool.description.as_deref()
    }

    /// JSON schema of the tool's parameters.
    pub fn input_schema(&self) -> &JsonObject {
        &self.tool.input_schema
    }

    /// The MCP tool model.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Validate the arguments and run the handler.
    pub async fn invoke(&self, arguments: JsonObject) -> Result<InvocationResult, ToolError> {
        let future = (self.handler)(arguments)?;
        Ok(future.await)
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.tool.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    descriptors: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool definition.
    pub fn register<T: ToolDefinition>(&mut self, definition: T) -> Result<(), ToolError> {
        self.register_descriptor(ToolDescriptor::new(definition))
    }

    /// Register an already built descriptor.
    pub fn register_descriptor(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        let name = descriptor.name().to_string();
        if self.index.contains_key(&name) {
            warn!("Rejecting duplicate tool registration: {}", name);
            return Err(ToolError::duplicate_name(name));
        }

        info!("Registering tool: {}", name);
        self.index.insert(name, self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn resolve(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.descriptors[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Iterate over all tools in registration order.
    pub fn list(&self) -> impl Iterator<Item = &ToolDescriptor> + '_ {
        self.descriptors.iter()
    }

    /// Get all tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.list().map(ToolDescriptor::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.list().map(|d| d.tool().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Dispatch a tool call to the appropriate handler.
    #[instrument(skip(self, arguments))]
    pub async fn call(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<InvocationResult, ToolError> {
        let descriptor = self.resolve(name).inspect_err(|_| {
            warn!("Unknown tool requested: {}", name);
        })?;

        debug!("Dispatching tool call");
        descriptor.invoke(arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct EchoParams {
        message: String,
    }

    struct EchoTool;

    #[async_trait]
    impl ToolDefinition for EchoTool {
        const NAME: &'static str = "echo";
        const DESCRIPTION: &'static str = "Echo a message";
        type Params = EchoParams;

        async fn call(&self, params: EchoParams) -> InvocationResult {
            InvocationResult::text(params.message)
        }
    }

    struct OtherTool;

    #[async_trait]
    impl ToolDefinition for OtherTool {
        const NAME: &'static str = "other";
        const DESCRIPTION: &'static str = "Another tool";
        type Params = EchoParams;

        async fn call(&self, _params: EchoParams) -> InvocationResult {
            InvocationResult::text("other")
        }
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();
        let err = registry.register(EchoTool).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateName(ref n) if n == "echo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = ToolRegistry::new();
        let err = registry.resolve("missing").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(ref n) if n == "missing"));
    }

    #[test]
    fn test_resolve_returns_matching_name() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();
        let descriptor = registry.resolve("echo").unwrap();
        assert_eq!(descriptor.name(), "echo");
        assert_eq!(descriptor.description(), Some("Echo a message"));
        assert!(descriptor.input_schema().contains_key("properties"));
    }

    #[test]
    fn test_list_is_ordered_and_restartable() {
        let mut registry = ToolRegistry::new();
        registry.register(OtherTool).unwrap();
        registry.register(EchoTool).unwrap();

        let first: Vec<_> = registry.list().map(|d| d.name().to_string()).collect();
        let second: Vec<_> = registry.list().map(|d| d.name().to_string()).collect();
        assert_eq!(first, vec!["other", "echo"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_call_dispatches() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();
        let result = registry
            .call("echo", args(serde_json::json!({ "message": "hi" })))
            .await
            .unwrap();
        assert_eq!(result, InvocationResult::text("hi"));
    }

    #[tokio::test]
    async fn test_call_rejects_malformed_arguments() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();

        let err = registry
            .call("echo", args(serde_json::json!({ "message": 42 })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { ref tool, .. } if tool == "echo"));

        let err = registry.call("echo", JsonObject::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }

    #[tokio::test]
    async fn test_call_unknown() {
        let registry = ToolRegistry::new();
        let err = registry.call("nope", JsonObject::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }
}
