//! Greeting tools.
//!
//! `say_hello` greets a single person, `say_hello_multiple` produces one
//! bulleted greeting line per name. Both are pure string formatting.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::domains::tools::{InvocationResult, ToolDefinition};

/// Greeting used when no usable name was given.
pub const ANONYMOUS_GREETING: &str = "안녕하세요!";

/// Returned by [`say_hello_multiple`] for an empty list.
pub const NO_NAMES: &str = "이름이 없습니다.";

/// Prefix of each line produced by [`say_hello_multiple`].
pub const BULLET: &str = "• ";

/// Greet one person. Blank names get the anonymous greeting.
pub fn say_hello(name: &str) -> String {
    if name.trim().is_empty() {
        return ANONYMOUS_GREETING.to_string();
    }
    format!("안녕하세요, {}님!", name)
}

/// Greet several people, one bulleted line each, in input order.
pub fn say_hello_multiple<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        return NO_NAMES.to_string();
    }

    names
        .iter()
        .map(|name| format!("{}{}", BULLET, say_hello(name.as_ref())))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// say_hello
// ============================================================================

/// Parameters for `say_hello`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SayHelloParams {
    /// Name of the person to greet.
    #[schemars(description = "Name of the person to greet (may be empty)")]
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct SayHelloTool;

#[async_trait]
impl ToolDefinition for SayHelloTool {
    const NAME: &'static str = "say_hello";
    const DESCRIPTION: &'static str =
        "Greet one person by name. An empty name returns a generic greeting.";
    type Params = SayHelloParams;

    async fn call(&self, params: SayHelloParams) -> InvocationResult {
        debug!("Greeting {:?}", params.name);
        InvocationResult::text(say_hello(&params.name))
    }
}

// ============================================================================
// say_hello_multiple
// ============================================================================

/// Parameters for `say_hello_multiple`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SayHelloMultipleParams {
    #[schemars(description = "Names of the people to greet, in order")]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SayHelloMultipleTool;

#[async_trait]
impl ToolDefinition for SayHelloMultipleTool {
    const NAME: &'static str = "say_hello_multiple";
    const DESCRIPTION: &'static str =
        "Greet several people at once. Returns one bulleted greeting line per name.";
    type Params = SayHelloMultipleParams;

    async fn call(&self, params: SayHelloMultipleParams) -> InvocationResult {
        debug!("Greeting {} name(s)", params.names.len());
        InvocationResult::text(say_hello_multiple(&params.names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_hello_blank_names() {
        for blank in ["", " ", "\t\n", "\u{3000}"] {
            assert_eq!(say_hello(blank), ANONYMOUS_GREETING);
        }
    }

    #[test]
    fn test_say_hello_echoes_name_verbatim() {
        for name in ["철수", " padded ", "<script>", "{{greeting}}"] {
            let greeting = say_hello(name);
            assert!(greeting.contains(name), "{greeting} should contain {name}");
            assert_ne!(greeting, ANONYMOUS_GREETING);
        }
        assert_eq!(say_hello("민수"), "안녕하세요, 민수님!");
    }

    #[test]
    fn test_say_hello_multiple_empty() {
        let names: [&str; 0] = [];
        assert_eq!(say_hello_multiple(&names), NO_NAMES);
    }

    #[test]
    fn test_say_hello_multiple_lines() {
        let names = ["A", "", "C"];
        let output = say_hello_multiple(&names);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), names.len());
        for (line, name) in lines.iter().zip(names) {
            assert_eq!(*line, format!("{}{}", BULLET, say_hello(name)));
        }
    }

    #[test]
    fn test_say_hello_multiple_distinct_and_deterministic() {
        let empty: Vec<String> = vec![];
        let single = vec!["A".to_string()];
        assert_ne!(say_hello_multiple(&empty), say_hello_multiple(&single));
        assert_eq!(say_hello_multiple(&single), say_hello_multiple(&single));
        assert_eq!(say_hello_multiple(&single), "• 안녕하세요, A님!");
    }

    #[tokio::test]
    async fn test_tools_wrap_functions() {
        let result = SayHelloTool
            .call(SayHelloParams {
                name: "B".to_string(),
            })
            .await;
        assert_eq!(result, InvocationResult::text("안녕하세요, B님!"));

        let result = SayHelloMultipleTool
            .call(SayHelloMultipleParams { names: vec![] })
            .await;
        assert_eq!(result, InvocationResult::text(NO_NAMES));
    }
}
