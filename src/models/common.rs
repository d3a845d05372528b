//! Small shapes shared across resource types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response to most create calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IdResponse {
    /// The id of the newly created object.
    #[serde(rename = "Id")]
    pub id: String,
}

/// Version of a swarm object, required on update to avoid conflicting writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
}

/// A driver (network, logging, secrets) and its options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Driver {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, String>>,
}

/// Error body returned by the daemon on failed calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub message: String,
}
