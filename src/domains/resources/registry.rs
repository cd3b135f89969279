//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{DocsReadmeResource, ResourceDefinition};
use super::service::ResourceEntry;

/// Create an annotated resource entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build_resource::<DocsReadmeResource>()]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![DocsReadmeResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].resource.raw.uri, "docs://hello/readme");
        assert_eq!(
            resources[0].resource.raw.mime_type.as_deref(),
            Some("text/markdown")
        );
    }

    #[test]
    fn test_resource_uris_match_entries() {
        let entries = get_all_resources();
        let uris = resource_uris();
        assert_eq!(entries.len(), uris.len());
        for entry in &entries {
            assert!(uris.contains(&entry.resource.raw.uri.as_str()));
        }
    }
}
