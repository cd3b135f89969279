//! Hello MCP Server Library
//!
//! A Model Context Protocol server exposing greeting tools and a proxy to
//! the public data portal's tourism-course weather forecast API, served
//! over stdio or stateless HTTP.
//!
//! # Architecture
//!
//! - **core**: CLI, configuration, error handling, the MCP server handler
//!   and the transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: `say_hello`, `say_hello_multiple`, `get_tour_weather_forecast`
//!   - **resources**: the `docs://hello/readme` usage guide
//!   - **prompts**: the `greeting_message` prompt
//!
//! # Example
//!
//! ```rust,no_run
//! use hello_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env(false)?;
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
