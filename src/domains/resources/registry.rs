//! Resource Registry - central registration of all resources.
//!
//! Fixed resources are declared through `ResourceDefinition`; the schema
//! resources are generated from the model catalog.

use rmcp::model::{AnnotateAble, RawResource, ResourceTemplate};

use super::definitions::{
    EndpointCatalogResource, ResourceDefinition, ServerInfoResource, schemas,
};
use super::service::{ResourceContent, ResourceEntry};
use crate::models::catalog;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

fn build_schema_resource(name: &'static str) -> ResourceEntry {
    let mut raw = RawResource::new(schemas::schema_uri(name), format!("{} schema", name));
    raw.description = Some(format!("JSON Schema of the Docker Engine `{}` type", name));
    raw.mime_type = Some("application/json".to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: ResourceContent::Schema(name),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    let mut resources = vec![
        build_resource::<ServerInfoResource>(),
        build_resource::<EndpointCatalogResource>(),
    ];
    resources.extend(catalog().into_iter().map(|entry| build_schema_resource(entry.name)));
    resources
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![schemas::template()]
}
