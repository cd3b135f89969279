//! Greeting message prompt definition.
//!
//! Asks the model to write a short greeting for `recipient`, starting with
//! the same line the `say_hello` tool would produce.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::prompts::registry::build_template;
use crate::domains::tools::definitions::say_hello;

pub struct GreetingMessagePrompt;

impl PromptDefinition for GreetingMessagePrompt {
    const NAME: &'static str = "greeting_message";
    const DESCRIPTION: &'static str = "Instructions for writing a friendly greeting message";

    fn template() -> &'static str {
        "{{recipient}}님에게 보낼 인사 메시지를 작성하세요.

다음 형식으로 시작하세요:
{{greeting}}

톤: 친근하고 공손하게
길이: 3~5 문장
"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "recipient".to_string(),
            title: None,
            description: Some("Name of the person receiving the greeting".to_string()),
            required: Some(true),
        }]
    }

    fn derived_arguments(arguments: &HashMap<String, String>) -> HashMap<String, String> {
        let recipient = arguments.get("recipient").map(String::as_str).unwrap_or("");
        HashMap::from([("greeting".to_string(), say_hello(recipient))])
    }
}

/// Render the greeting prompt text for `recipient`.
pub fn greeting_message(recipient: &str) -> String {
    let arguments = HashMap::from([("recipient".to_string(), recipient.to_string())]);
    // The template is a compile-time constant with balanced placeholders.
    build_template::<GreetingMessagePrompt>()
        .render(&arguments)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_message_metadata() {
        assert_eq!(GreetingMessagePrompt::NAME, "greeting_message");
        let args = GreetingMessagePrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "recipient");
        assert_eq!(args[0].required, Some(true));
    }

    #[test]
    fn test_greeting_message_embeds_greeting() {
        let text = greeting_message("지민");
        assert_eq!(
            text,
            "지민님에게 보낼 인사 메시지를 작성하세요.\n\n다음 형식으로 시작하세요:\n\
             안녕하세요, 지민님!\n\n톤: 친근하고 공손하게\n길이: 3~5 문장\n"
        );
    }

    #[test]
    fn test_greeting_message_blank_recipient() {
        let text = greeting_message("  ");
        assert!(text.contains("\n안녕하세요!\n"));
    }

    #[test]
    fn test_recipient_is_not_expanded() {
        let text = greeting_message("{{greeting}}");
        assert!(text.starts_with("{{greeting}}님에게"));
    }
}
