//! Tool Registry - central lookup and dispatch for all tools.
//!
//! This module provides:
//! - Tool metadata for listing
//! - Name-based dispatch through the shared adapter (used by the HTTP transport)

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::adapter::DockerAdapter;
use super::definitions;
use super::endpoint::Endpoint;
use super::error::ToolError;
use crate::core::config::Config;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - every Docker endpoint plus the adapter that serves them.
#[derive(Clone)]
pub struct ToolRegistry {
    adapter: DockerAdapter,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Result<Self, ToolError> {
        Ok(Self {
            adapter: DockerAdapter::new(config)?,
        })
    }

    pub fn adapter(&self) -> &DockerAdapter {
        &self.adapter
    }

    /// Look up an endpoint by tool name.
    pub fn find(&self, name: &str) -> Option<&'static Endpoint> {
        definitions::find(name)
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        definitions::all_endpoints().map(|e| e.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both transports list tools from this catalog.
    pub fn get_all_tools() -> Vec<Tool> {
        definitions::all_endpoints().map(Endpoint::to_tool).collect()
    }

    /// Dispatch an HTTP tool call.
    ///
    /// Unknown tools are protocol errors; everything else, including
    /// non-object arguments and adapter failures, is a tool result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let endpoint = self.find(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name).to_string()
        })?;

        let result: CallToolResult = match arguments {
            serde_json::Value::Object(args) => self.adapter.invoke(endpoint, args).await,
            serde_json::Value::Null => self.adapter.invoke(endpoint, JsonObject::new()).await,
            _ => {
                warn!("{} called with non-object arguments", name);
                ToolError::invalid_arguments("expected a JSON object").into_call_result()
            }
        };

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}
