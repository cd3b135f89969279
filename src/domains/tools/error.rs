//! Tool-specific error types.
//!
//! These cover dispatch failures only. Failures that happen *inside* a tool
//! (an upstream API rejecting a request, an unparseable body) are reported
//! as [`InvocationResult::Failure`](super::InvocationResult) instead.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while registering or dispatching tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateName(String),

    /// The arguments did not match the tool's parameter schema.
    #[error("Invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) | ToolError::InvalidArguments { .. } => {
                McpError::invalid_params(err.to_string(), None)
            }
            ToolError::DuplicateName(_) => McpError::internal_error(err.to_string(), None),
        }
    }
}
