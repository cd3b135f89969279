//! MCP Server Entry Point
//!
//! Parses the command line, loads configuration, initializes logging, and
//! starts the server on the selected transport (stdio by default,
//! stateless HTTP with `--http-stream`).

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hello_mcp_server::core::{Cli, Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = Config::from_env(cli.http_stream)?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    if config.forecast.service_key.is_none() {
        warn!(
            "MCP_FORECAST_SERVICE_KEY not set - get_tour_weather_forecast will \
             report an error until a public data portal key is configured"
        );
    }

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the stdio transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
