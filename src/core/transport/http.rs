//! HTTP transport implementation.
//!
//! Stateless JSON-RPC over HTTP POST ("HTTP stream" mode). Every request is
//! handled on its own: no session is created on `initialize` and nothing is
//! remembered between requests, so any replica can serve any call. Responses
//! are always plain JSON; the server never opens an SSE stream.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rmcp::ServerHandler;
use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

const JSONRPC_VERSION: &str = "2.0";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Parse error.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::error(None, -32700, msg)
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Internal error.
    pub fn internal_error(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }
}

/// Application state shared across HTTP handlers.
///
/// Holds only the immutable server; there is no per-client state.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router serving `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let state = AppState { server };

        let mut app = Router::new()
            .route(
                &self.config.rpc_path,
                post(handle_rpc).get(stream_not_supported),
            )
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until Ctrl-C or SIGTERM.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (stateless JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP transport finished");
        Ok(())
    }
}

/// Resolve when the process is asked to terminate.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP (stateless)",
        "endpoints": {
            "rpc": "/mcp",
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": "Send POST requests to /mcp with JSON-RPC messages"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// GET on the RPC path would open a server-to-client stream.
async fn stream_not_supported() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(JsonRpcResponse::error(
            None,
            -32000,
            "Server-initiated streams are not supported in stateless mode",
        )),
    )
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method = tracing::field::Empty))]
async fn handle_rpc(State(state): State<AppState>, body: Bytes) -> Response {
    let request: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejecting malformed JSON-RPC body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(JsonRpcResponse::parse_error(e.to_string())),
            )
                .into_response();
        }
    };

    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    match process_request(&state, request).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Process a JSON-RPC request. Notifications produce no response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    if request.jsonrpc != JSONRPC_VERSION {
        return Some(JsonRpcResponse::invalid_request(request.id));
    }

    if request.method.starts_with("notifications/") {
        debug!("Received notification: {}", request.method);
        return None;
    }

    let response = match request.method.as_str() {
        "initialize" => handle_initialize(state, request),
        "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),
        "tools/list" => handle_tools_list(state, request),
        "tools/call" => handle_tools_call(state, request).await,
        "resources/list" => handle_resources_list(state, request).await,
        "resources/templates/list" => JsonRpcResponse::success(
            request.id,
            serde_json::json!({ "resourceTemplates": [] }),
        ),
        "resources/read" => handle_resources_read(state, request).await,
        "prompts/list" => handle_prompts_list(state, request).await,
        "prompts/get" => handle_prompts_get(state, request).await,
        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    };
    Some(response)
}

/// Serialize an rmcp result into a JSON-RPC success response.
fn to_response<T: Serialize>(id: Option<serde_json::Value>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::internal_error(id, e.to_string()),
    }
}

/// Extract a required string field from the request params.
fn required_str(params: &Option<serde_json::Value>, field: &str) -> Result<String, String> {
    let params = params.as_ref().ok_or_else(|| "Missing params".to_string())?;
    params
        .get(field)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| format!("Missing '{}'", field))
}

/// Handle initialize request.
fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");
    to_response(request.id, &state.server.get_info())
}

/// Handle tools/list request.
fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let tools = state.server.list_tool_models();
    to_response(request.id, &serde_json::json!({ "tools": tools }))
}

/// Handle tools/call request.
async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let name = match required_str(&request.params, "name") {
        Ok(name) => name,
        Err(msg) => return JsonRpcResponse::invalid_params(request.id, msg),
    };

    let arguments: JsonObject = match request.params.as_ref().and_then(|p| p.get("arguments")) {
        None | Some(serde_json::Value::Null) => JsonObject::new(),
        Some(serde_json::Value::Object(map)) => map.clone(),
        Some(_) => {
            return JsonRpcResponse::invalid_params(request.id, "'arguments' must be an object");
        }
    };

    match state.server.invoke_tool(&name, arguments).await {
        Ok(result) => to_response(request.id, &result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

/// Handle resources/list request.
async fn handle_resources_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let resources = state.server.list_resource_models().await;
    to_response(request.id, &serde_json::json!({ "resources": resources }))
}

/// Handle resources/read request.
async fn handle_resources_read(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let uri = match required_str(&request.params, "uri") {
        Ok(uri) => uri,
        Err(msg) => return JsonRpcResponse::invalid_params(request.id, msg),
    };

    match state.server.read_resource_contents(&uri).await {
        Ok(result) => to_response(request.id, &result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

/// Handle prompts/list request.
async fn handle_prompts_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let prompts = state.server.list_prompt_models().await;
    to_response(request.id, &serde_json::json!({ "prompts": prompts }))
}

/// Handle prompts/get request.
async fn handle_prompts_get(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let name = match required_str(&request.params, "name") {
        Ok(name) => name,
        Err(msg) => return JsonRpcResponse::invalid_params(request.id, msg),
    };

    let arguments: Option<HashMap<String, String>> = request
        .params
        .as_ref()
        .and_then(|p| p.get("arguments"))
        .and_then(|v| v.as_object())
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        });

    match state.server.render_prompt(&name, arguments).await {
        Ok(result) => to_response(request.id, &result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}
