//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - Template string
//! - Optional derived variables

use std::collections::HashMap;

use rmcp::model::PromptArgument;

mod greeting_message;

pub use greeting_message::{GreetingMessagePrompt, greeting_message};

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Extra template variables computed from the arguments.
    fn derived_arguments(_arguments: &HashMap<String, String>) -> HashMap<String, String> {
        HashMap::new()
    }
}
