//! Endpoint catalog resource: a Markdown index of every tool.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::definitions::all_endpoints;

pub struct EndpointCatalogResource;

impl ResourceDefinition for EndpointCatalogResource {
    const URI: &'static str = "docker://endpoints";
    const NAME: &'static str = "Docker Engine Endpoints";
    const DESCRIPTION: &'static str =
        "Every exposed tool with its HTTP verb and Docker Engine API path";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::EndpointCatalog
    }
}

impl EndpointCatalogResource {
    pub fn render() -> String {
        let mut out = String::from("# Docker Engine Endpoints\n\n");
        out.push_str("| Tool | Method | Path | Description |\n");
        out.push_str("|---|---|---|---|\n");
        for endpoint in all_endpoints() {
            out.push_str(&format!(
                "| `{}` | {} | `{}` | {} |\n",
                endpoint.name,
                endpoint.method.as_str(),
                endpoint.path,
                endpoint.description
            ));
        }
        out
    }
}
