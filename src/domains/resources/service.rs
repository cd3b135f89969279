//! Resource service implementation.
//!
//! The ResourceService handles resource listing and reading. Resources are
//! defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Registered resources, in registration order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The static text content.
    pub content: String,
}

impl ResourceService {
    /// Create a new ResourceService populated from the registry.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: Vec::new(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        service
    }

    /// Register a resource. A later entry with the same URI replaces the earlier one.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .retain(|existing| existing.resource.raw.uri != entry.resource.raw.uri);
        self.resources.push(entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let mut contents = ResourceContents::text(entry.content.clone(), uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = entry.resource.raw.mime_type.clone();
        }

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}
