//! Swarm service and node shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::ObjectVersion;

/// User modifiable configuration for a service.
///
/// Deeply nested sections (task template, update policy, …) are kept as raw
/// JSON and passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_template: Option<Value>,
    /// Scheduling mode: `Replicated`, `Global`, …
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_config: Option<Value>,
    /// Deprecated in favour of `TaskTemplate.Networks`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_spec: Option<Value>,
}

/// A swarm service, as returned by `GET /services/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ObjectVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ServiceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<Value>,
}

/// Response to `POST /services/{id}/update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceUpdateResponse {
    /// Optional warning messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// User modifiable configuration for a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct NodeSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    /// `worker` or `manager`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// `active`, `pause` or `drain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}
