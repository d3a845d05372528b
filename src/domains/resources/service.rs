//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Resources are
//! defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::definitions::{EndpointCatalogResource, ServerInfoResource, schemas};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::Config;

/// Service for listing and reading resources.
pub struct ResourceService {
    config: Arc<Config>,

    /// Key: resource URI.
    resources: BTreeMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub resource: Resource,
    pub content: ResourceContent,
}

/// How a resource's content is produced on read.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Server name, version and Docker target.
    ServerInfo,

    /// Markdown index of every tool.
    EndpointCatalog,

    /// JSON Schema of the named catalog model.
    Schema(&'static str),
}

impl ResourceService {
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: BTreeMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match &entry.content {
            ResourceContent::ServerInfo => ServerInfoResource::render(&self.config)?,
            ResourceContent::EndpointCatalog => EndpointCatalogResource::render(),
            ResourceContent::Schema(name) => {
                schemas::render(name).ok_or_else(|| ResourceError::not_found(uri))??
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> ResourceService {
        ResourceService::new(Arc::new(Config::default()))
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = test_service();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), get_all_resources().len());
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = test_service();
        let result = service.read_resource("mcp://server/info").await.unwrap();
        let info: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(info["docker_base_url"], "http://localhost:2375");
    }

    #[tokio::test]
    async fn test_read_schema_resource() {
        let service = test_service();
        let result = service
            .read_resource("docker://schemas/ServiceSpec")
            .await
            .unwrap();
        assert!(text_of(&result).contains("TaskTemplate"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = test_service();
        let result = service.read_resource("docker://schemas/Spaceship").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
