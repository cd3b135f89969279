//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `registry.rs` - `ToolDefinition` trait and the name → handler registry
//! - `router.rs` - Builds the registry with every tool this server exposes
//! - `outcome.rs` - Invocation results and their MCP representation
//! - `error.rs` - Dispatch errors
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` and implement `ToolDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `router.rs`
//!
//! Both transports dispatch through the same registry, so nothing else
//! needs to change.

pub mod definitions;
mod error;
mod outcome;
mod registry;
pub mod router;

pub use error::ToolError;
pub use outcome::{InvocationResult, ToolFailure, ToolPayload};
pub use registry::{ToolDefinition, ToolDescriptor, ToolRegistry};
pub use router::build_tool_registry;
