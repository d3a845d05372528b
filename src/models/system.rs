//! Registry authentication shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Credentials for a registry, sent to `POST /auth` or base64url-encoded
/// into the `X-Registry-Auth` header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serveraddress: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AuthResponse {
    /// The status of the authentication.
    pub status: String,
    /// An opaque token used to authenticate a user after a successful login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_token: Option<String>,
}
