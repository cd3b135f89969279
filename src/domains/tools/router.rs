//! Tool Router - builds the registry of every tool this server exposes.

use crate::core::config::Config;

use super::definitions::{SayHelloMultipleTool, SayHelloTool, TourForecastTool};
use super::{ToolError, ToolRegistry};

/// Build the tool registry with all tools, in listing order.
pub fn build_tool_registry(config: &Config) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register(SayHelloTool)?;
    registry.register(SayHelloMultipleTool)?;
    registry.register(TourForecastTool::new(config.forecast.clone()))?;
    Ok(registry)
}
