//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the `{{variable}}`
//! renderer used by every prompt.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// Computes extra template variables from the caller's arguments.
pub type DeriveArguments = fn(&HashMap<String, String>) -> HashMap<String, String>;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,

    /// Variables computed from the arguments before rendering.
    pub derive: Option<DeriveArguments>,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
            derive: None,
        }
    }

    /// Attach a hook computing extra variables.
    pub fn with_derive(mut self, derive: DeriveArguments) -> Self {
        self.derive = Some(derive);
        self
    }

    /// Render the template with the given arguments.
    ///
    /// Placeholders are replaced in a single left-to-right pass, so text
    /// coming from an argument value is never expanded again. Placeholders
    /// with no value render as the empty string.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let derived = self.derive.map(|derive| derive(arguments)).unwrap_or_default();

        let mut output = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open.find("}}").ok_or_else(|| {
                PromptError::template(format!("Unclosed placeholder in prompt '{}'", self.name))
            })?;

            let key = after_open[..end].trim();
            if let Some(value) = derived.get(key).or_else(|| arguments.get(key)) {
                output.push_str(value);
            }
            rest = &after_open[end + 2..];
        }
        output.push_str(rest);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");
        let result = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let template = PromptTemplate::new("test", None, vec![], "Hello{{ name }}!");
        assert_eq!(template.render(&HashMap::new()).unwrap(), "Hello!");
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let template = PromptTemplate::new("test", None, vec![], "{{a}} / {{b}}");
        let result = template
            .render(&args(&[("a", "{{b}}"), ("b", "B")]))
            .unwrap();
        assert_eq!(result, "{{b}} / B");
    }

    #[test]
    fn test_derived_variables() {
        fn shout(arguments: &HashMap<String, String>) -> HashMap<String, String> {
            let name = arguments.get("name").cloned().unwrap_or_default();
            HashMap::from([("loud".to_string(), name.to_uppercase())])
        }

        let template =
            PromptTemplate::new("test", None, vec![], "{{name}} {{loud}}").with_derive(shout);
        let result = template.render(&args(&[("name", "hey")])).unwrap();
        assert_eq!(result, "hey HEY");
    }

    #[test]
    fn test_unclosed_placeholder() {
        let template = PromptTemplate::new("test", None, vec![], "Hello {{name");
        assert!(matches!(
            template.render(&HashMap::new()),
            Err(PromptError::TemplateError(_))
        ));
    }
}
