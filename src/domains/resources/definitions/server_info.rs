//! Server info resource definition.

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::ToolRegistry;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "mcp://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server name and version, target Docker Engine URL and tool count";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::ServerInfo
    }
}

impl ServerInfoResource {
    /// Render the current server state as pretty JSON.
    pub fn render(config: &Config) -> Result<String, serde_json::Error> {
        let query_encoding = if config.docker.encode_query {
            "percent-encoded"
        } else {
            "raw"
        };

        let info = serde_json::json!({
            "server": config.server.name,
            "version": config.server.version,
            "docker_base_url": config.docker.base_url,
            "tool_count": ToolRegistry::get_all_tools().len(),
            "query_encoding": query_encoding,
            "timeout_secs": config.docker.timeout_secs,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        serde_json::to_string_pretty(&info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "mcp://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_server_info_render() {
        let config = Config::with_base_url("http://docker.internal:2375");
        let rendered = ServerInfoResource::render(&config).unwrap();
        let info: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(info["docker_base_url"], "http://docker.internal:2375");
        assert_eq!(info["tool_count"], 95);
        assert_eq!(info["query_encoding"], "raw");
        assert!(info["timestamp"].is_string());
    }
}
