//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and
//! content provider.

mod docs_readme;

pub use docs_readme::{DocsReadmeResource, get_readme};

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> String;
}
