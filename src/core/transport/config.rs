//! Transport configuration types.

use serde::{Deserialize, Serialize};

use super::{TransportError, TransportResult};

/// Environment variable holding the HTTP listen port.
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is not set.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    Stdio,

    /// Stateless JSON-RPC over HTTP.
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_rpc_path() -> String {
    "/mcp".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::Stdio
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Create a STDIO transport config.
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create an HTTP transport config on all interfaces.
    pub fn http(port: u16) -> Self {
        Self::Http(HttpConfig {
            port,
            ..Default::default()
        })
    }

    /// Pick the transport from the `--http-stream` flag and the raw `PORT` value.
    ///
    /// Without the flag the server speaks MCP over stdio and `port` is ignored.
    pub fn select(http_stream: bool, port: Option<&str>) -> TransportResult<Self> {
        if !http_stream {
            return Ok(Self::Stdio);
        }

        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| TransportError::invalid_port(raw))?,
            None => DEFAULT_HTTP_PORT,
        };
        Ok(Self::http(port))
    }

    /// Load transport config from the flag and the `PORT` environment variable.
    pub fn from_env(http_stream: bool) -> TransportResult<Self> {
        let port = std::env::var(PORT_ENV).ok();
        Self::select(http_stream, port.as_deref())
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            Self::Http(cfg) => format!(
                "HTTP stream on {}:{}{} (stateless, JSON responses)",
                cfg.host, cfg.port, cfg.rpc_path
            ),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        matches!(self, Self::Stdio)
    }

    /// The port this transport listens on, if it opens one.
    pub fn port(&self) -> Option<u16> {
        match self {
            Self::Stdio => None,
            Self::Http(cfg) => Some(cfg.port),
        }
    }
}
