//! Transport layer for the MCP server.
//!
//! This module provides the two transports the server can run on:
//! - **STDIO**: Standard input/output, the default MCP mode
//! - **HTTP**: Stateless JSON-RPC over HTTP POST, selected with `--http-stream`
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{DEFAULT_HTTP_PORT, HttpConfig, PORT_ENV, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::{TransportService, TransportState};
