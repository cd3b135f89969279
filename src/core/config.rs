//! Configuration management for the MCP server.
//!
//! Configuration is assembled once at startup from defaults, environment
//! variables (optionally loaded from a `.env` file) and the command line,
//! and is immutable afterwards.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default upstream endpoint for the tourism-course forecast API.
pub const DEFAULT_FORECAST_BASE_URL: &str =
    "https://apis.data.go.kr/1360000/TourStnInfoService1/getTourStnVilageFcst1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream forecast API configuration.
    pub forecast: ForecastConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,

    /// Usage instructions sent to clients on initialize.
    pub instructions: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the tourism forecast API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Endpoint queried by the forecast tool.
    pub base_url: String,

    /// Public data portal service key (decoded form).
    pub service_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ForecastConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastConfig")
            .field("base_url", &self.base_url)
            .field(
                "service_key",
                &self.service_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FORECAST_BASE_URL.to_string(),
            service_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-hello".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                instructions: "이름을 받아 인사하거나 관광지 동네예보를 조회하는 MCP 서버입니다."
                    .to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            forecast: ForecastConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// `http_stream` is the `--http-stream` command-line flag; it selects
    /// the transport, whose port then comes from `PORT`. Other variables are
    /// prefixed with `MCP_`: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_FORECAST_SERVICE_KEY`, `MCP_FORECAST_BASE_URL`.
    pub fn from_env(http_stream: bool) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env(http_stream)?;

        if let Ok(base_url) = std::env::var("MCP_FORECAST_BASE_URL") {
            reqwest::Url::parse(&base_url).map_err(|e| {
                Error::config(format!("MCP_FORECAST_BASE_URL is not a valid URL: {}", e))
            })?;
            config.forecast.base_url = base_url;
        }

        if let Ok(key) = std::env::var("MCP_FORECAST_SERVICE_KEY") {
            if !key.trim().is_empty() {
                config.forecast.service_key = Some(key);
            }
        }

        Ok(config)
    }
}
