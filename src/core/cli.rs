//! Command-line interface.

use clap::Parser;

/// MCP server with greeting tools and a tourism weather forecast proxy.
#[derive(Debug, Clone, Parser)]
#[command(name = "hello-mcp-server", version, about)]
pub struct Cli {
    /// Serve stateless streamable HTTP on 0.0.0.0:$PORT instead of stdio.
    #[arg(long = "http-stream")]
    pub http_stream: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stdio() {
        let cli = Cli::try_parse_from(["hello-mcp-server"]).unwrap();
        assert!(!cli.http_stream);
    }

    #[test]
    fn test_http_stream_flag() {
        let cli = Cli::try_parse_from(["hello-mcp-server", "--http-stream"]).unwrap();
        assert!(cli.http_stream);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["hello-mcp-server", "--tcp"]).is_err());
    }
}
