//! Transport service - selects and runs the configured transport.
//!
//! Lifecycle: `Unstarted` → `StdioServing` | `HttpServing` → `Stopped`.
//! There is no way back to `Unstarted`; a stopped service is dropped.

use std::fmt;

use tracing::{error, info};

use super::http::HttpTransport;
use super::stdio::StdioTransport;
use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

/// Lifecycle state of a [`TransportService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    /// Created, not yet serving.
    Unstarted,
    /// Serving MCP over stdin/stdout.
    StdioServing,
    /// Serving JSON-RPC over HTTP on the given port.
    HttpServing { port: u16 },
    /// Finished, either cleanly or after a transport fault.
    Stopped,
}

impl fmt::Display for TransportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstarted => write!(f, "unstarted"),
            Self::StdioServing => write!(f, "stdio-serving"),
            Self::HttpServing { port } => write!(f, "http-serving:{}", port),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
    state: TransportState,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self {
            config,
            state: TransportState::Unstarted,
        }
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// The serving state the configuration selects.
    pub fn serving_state(&self) -> TransportState {
        match &self.config {
            TransportConfig::Stdio => TransportState::StdioServing,
            TransportConfig::Http(cfg) => TransportState::HttpServing { port: cfg.port },
        }
    }

    fn transition(&mut self, next: TransportState) {
        info!("Transport state: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(mut self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());
        self.transition(self.serving_state());

        let result = match self.config.clone() {
            TransportConfig::Stdio => StdioTransport::run(server).await,
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        };

        if let Err(e) = &result {
            error!("Transport failed: {}", e);
        }
        self.transition(TransportState::Stopped);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service_is_unstarted() {
        let service = TransportService::new(TransportConfig::stdio());
        assert_eq!(service.state(), TransportState::Unstarted);
    }

    #[test]
    fn test_serving_state_follows_config() {
        let stdio = TransportService::new(TransportConfig::select(false, None).unwrap());
        assert_eq!(stdio.serving_state(), TransportState::StdioServing);

        let http = TransportService::new(TransportConfig::select(true, Some("9090")).unwrap());
        assert_eq!(
            http.serving_state(),
            TransportState::HttpServing { port: 9090 }
        );
    }

    #[tokio::test]
    async fn test_bind_failure_stops_service() {
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = occupied.local_addr().unwrap().port();

        let mut cfg = match TransportConfig::http(port) {
            TransportConfig::Http(cfg) => cfg,
            other => panic!("Expected HTTP config, got {:?}", other),
        };
        cfg.host = "127.0.0.1".to_string();

        let server = McpServer::new(crate::core::Config::default()).unwrap();
        let result = TransportService::new(TransportConfig::Http(cfg))
            .run(server)
            .await;
        assert!(matches!(
            result,
            Err(super::super::TransportError::BindError { .. })
        ));
    }
}
