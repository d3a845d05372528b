//! JSON Schema resources for the Docker type catalog.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

use crate::models::catalog;

const SCHEMA_PREFIX: &str = "docker://schemas/";

/// URI template advertised for the schema resources.
pub const SCHEMA_TEMPLATE: &str = "docker://schemas/{type}";

/// URI of the schema resource for a catalog model.
pub fn schema_uri(name: &str) -> String {
    format!("{}{}", SCHEMA_PREFIX, name)
}

pub fn template() -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: SCHEMA_TEMPLATE.to_string(),
        name: "Docker Schemas".to_string(),
        title: Some("Docker Engine type schemas".to_string()),
        description: Some(
            "JSON Schema of a Docker Engine type, e.g. docker://schemas/ContainerConfig".to_string(),
        ),
        mime_type: Some("application/json".to_string()),
    }
    .no_annotation()
}

/// Pretty JSON Schema of the named model, or `None` if it is not in the catalog.
pub fn render(name: &str) -> Option<Result<String, serde_json::Error>> {
    catalog()
        .into_iter()
        .find(|entry| entry.name == name)
        .map(|entry| serde_json::to_string_pretty(&(entry.schema)()))
}
