//! MCP capabilities exposed by the server.
//!
//! Each subdomain owns one MCP capability: tools (greetings and the tourism
//! forecast), resources (bundled documentation) and prompts.

pub mod prompts;
pub mod resources;
pub mod tools;
