//! Tool invocation results.
//!
//! Every tool handler returns an [`InvocationResult`]. A handler never
//! propagates an error of its own: a failed upstream call is still a
//! completed invocation, it just carries a [`ToolFailure`] payload.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The outcome of a single tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    /// The tool completed and produced a payload.
    Success(ToolPayload),

    /// The tool completed but reports a failure to the caller.
    Failure(ToolFailure),
}

/// Payload of a successful invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPayload {
    /// Plain text, e.g. a rendered greeting.
    Text(String),

    /// A JSON document returned verbatim.
    Json(serde_json::Value),
}

/// Structured error payload returned by a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFailure {
    /// Human readable error message.
    pub error: String,

    /// Additional context, e.g. the body of a rejected upstream response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Raw upstream body that could not be interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ToolFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            raw: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }
}

impl InvocationResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Success(ToolPayload::Text(text.into()))
    }

    pub fn json(value: serde_json::Value) -> Self {
        Self::Success(ToolPayload::Json(value))
    }

    pub fn failure(failure: ToolFailure) -> Self {
        Self::Failure(failure)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Convert into the MCP wire representation.
    pub fn into_call_result(self) -> CallToolResult {
        match self {
            Self::Success(ToolPayload::Text(text)) => {
                CallToolResult::success(vec![Content::text(text)])
            }
            Self::Success(ToolPayload::Json(value)) => {
                let mut result = CallToolResult::success(vec![Content::text(value.to_string())]);
                // structuredContent must be an object
                if value.is_object() {
                    result.structured_content = Some(value);
                }
                result
            }
            Self::Failure(failure) => {
                warn!("Tool reported failure: {}", failure.error);
                let value = serde_json::to_value(&failure)
                    .unwrap_or_else(|_| serde_json::json!({ "error": failure.error }));
                let mut result = CallToolResult::error(vec![Content::text(value.to_string())]);
                result.structured_content = Some(value);
                result
            }
        }
    }
}

impl From<InvocationResult> for CallToolResult {
    fn from(result: InvocationResult) -> Self {
        result.into_call_result()
    }
}
