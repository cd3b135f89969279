//! Prompts domain module.
//!
//! Prompts are template messages that clients fill in with arguments to
//! produce instructions for a language model.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and rendering
//! - `templates.rs` - Template rendering

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::{PromptDefinition, greeting_message};
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
