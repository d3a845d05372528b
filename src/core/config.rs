//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults. The configuration is immutable once the server starts and is
//! shared as `Arc<Config>`.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::models::AuthConfig;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default Docker Engine endpoint (the daemon's unencrypted TCP port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:2375";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Target Docker Engine API.
    pub docker: DockerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Authentication material forwarded to the daemon.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Docker Engine API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    /// Root URL of the Engine API, without a trailing slash.
    /// May include an API version prefix, e.g. `http://host:2375/v1.43`.
    pub base_url: String,

    /// Whole-request timeout. `None` keeps the HTTP client default.
    pub timeout_secs: Option<u64>,

    /// Percent-encode query parameter values.
    ///
    /// Off by default: values are interpolated as-is, so values containing
    /// `&`, `=`, `#` or `+` reach the daemon mangled.
    pub encode_query: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Authentication material sent to the daemon.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Sent as `Authorization: Bearer <token>` on every request
    /// (for daemons behind an authenticating proxy).
    pub bearer_token: Option<String>,

    /// Default `X-Registry-Auth` value for endpoints that accept one.
    /// A value supplied in the tool arguments takes precedence.
    pub registry_auth: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "[REDACTED]"))
            .field("registry_auth", &self.registry_auth.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            encode_query: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "docker-engine-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            docker: DockerConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a default configuration pointing at the given Engine URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.docker.base_url = normalize_base_url(&base_url.into());
        config
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// `DOCKER_HOST` is honoured as a fallback when it names a `tcp://` daemon.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_DOCKER_BASE_URL") {
            config.docker.base_url = normalize_base_url(&url);
        } else if let Some(url) = std::env::var("DOCKER_HOST")
            .ok()
            .and_then(|h| base_url_from_docker_host(&h))
        {
            config.docker.base_url = url;
        }

        config.docker.timeout_secs = std::env::var("MCP_DOCKER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        if let Ok(encode) = std::env::var("MCP_DOCKER_ENCODE_QUERY") {
            config.docker.encode_query = parse_flag(&encode);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.credentials.bearer_token = std::env::var("MCP_DOCKER_TOKEN").ok();
        config.credentials.registry_auth = registry_auth_from_env();

        config
    }

    /// Check the configuration and log anything noteworthy.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.docker.base_url).map_err(|e| {
            Error::config(format!("Invalid Docker base URL '{}': {}", self.docker.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Unsupported Docker base URL scheme '{}' (expected http or https)",
                url.scheme()
            )));
        }

        info!("Docker Engine API: {}", self.docker.base_url);

        if !self.docker.encode_query {
            warn!(
                "Query parameter values are sent without percent-encoding. \
                 Set MCP_DOCKER_ENCODE_QUERY=true to encode them."
            );
        }

        if self.credentials.registry_auth.is_some() {
            info!("Default registry credentials configured");
        }

        Ok(())
    }
}

/// Trim trailing slashes so paths can be appended directly.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Map `tcp://host:port` to `http://host:port`. Other schemes are not usable
/// over plain HTTP and are ignored.
fn base_url_from_docker_host(host: &str) -> Option<String> {
    host.strip_prefix("tcp://")
        .map(|rest| normalize_base_url(&format!("http://{}", rest)))
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Resolve the default `X-Registry-Auth` header value.
///
/// An explicit `MCP_DOCKER_REGISTRY_AUTH` is used verbatim; otherwise a
/// username/password pair is encoded the way the daemon expects.
fn registry_auth_from_env() -> Option<String> {
    if let Ok(raw) = std::env::var("MCP_DOCKER_REGISTRY_AUTH") {
        return Some(raw);
    }

    let username = std::env::var("MCP_DOCKER_REGISTRY_USERNAME").ok()?;
    let password = std::env::var("MCP_DOCKER_REGISTRY_PASSWORD").ok()?;
    let auth = AuthConfig {
        username: Some(username),
        password: Some(password),
        email: None,
        serveraddress: std::env::var("MCP_DOCKER_REGISTRY_SERVER").ok(),
    };

    match encode_registry_auth(&auth) {
        Ok(encoded) => Some(encoded),
        Err(e) => {
            warn!("Ignoring registry credentials: {}", e);
            None
        }
    }
}

/// Encode registry credentials as base64url JSON, the `X-Registry-Auth` format.
pub fn encode_registry_auth(auth: &AuthConfig) -> Result<String> {
    let json = serde_json::to_vec(auth)?;
    Ok(base64::engine::general_purpose::URL_SAFE.encode(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const DOCKER_VARS: &[&str] = &[
        "MCP_DOCKER_BASE_URL",
        "DOCKER_HOST",
        "MCP_DOCKER_TIMEOUT_SECS",
        "MCP_DOCKER_ENCODE_QUERY",
        "MCP_DOCKER_TOKEN",
        "MCP_DOCKER_REGISTRY_AUTH",
        "MCP_DOCKER_REGISTRY_USERNAME",
        "MCP_DOCKER_REGISTRY_PASSWORD",
        "MCP_DOCKER_REGISTRY_SERVER",
    ];

    fn clear_docker_env() {
        for var in DOCKER_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.docker.base_url, DEFAULT_BASE_URL);
        assert!(config.docker.timeout_secs.is_none());
        assert!(!config.docker.encode_query);
        assert!(config.credentials.bearer_token.is_none());
    }

    #[test]
    fn test_base_url_from_env_is_trimmed() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_docker_env();
        unsafe {
            std::env::set_var("MCP_DOCKER_BASE_URL", "http://docker.internal:2375/v1.43/");
            std::env::set_var("MCP_DOCKER_TIMEOUT_SECS", "30");
            std::env::set_var("MCP_DOCKER_ENCODE_QUERY", "true");
        }
        let config = Config::from_env();
        assert_eq!(config.docker.base_url, "http://docker.internal:2375/v1.43");
        assert_eq!(config.docker.timeout_secs, Some(30));
        assert!(config.docker.encode_query);
        clear_docker_env();
    }

    #[test]
    fn test_docker_host_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_docker_env();
        unsafe {
            std::env::set_var("DOCKER_HOST", "tcp://10.0.0.5:2376");
        }
        let config = Config::from_env();
        assert_eq!(config.docker.base_url, "http://10.0.0.5:2376");

        unsafe {
            std::env::set_var("DOCKER_HOST", "unix:///var/run/docker.sock");
        }
        let config = Config::from_env();
        assert_eq!(config.docker.base_url, DEFAULT_BASE_URL);
        clear_docker_env();
    }

    #[test]
    fn test_registry_auth_from_username_password() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_docker_env();
        unsafe {
            std::env::set_var("MCP_DOCKER_REGISTRY_USERNAME", "alice");
            std::env::set_var("MCP_DOCKER_REGISTRY_PASSWORD", "s3cret");
        }
        let config = Config::from_env();
        let encoded = config.credentials.registry_auth.expect("registry auth");
        let decoded = base64::engine::general_purpose::URL_SAFE
            .decode(encoded)
            .unwrap();
        let auth: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(auth["username"], "alice");
        assert_eq!(auth["password"], "s3cret");
        assert!(auth.get("serveraddress").is_none());
        clear_docker_env();
    }

    #[test]
    fn test_explicit_registry_auth_wins() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_docker_env();
        unsafe {
            std::env::set_var("MCP_DOCKER_REGISTRY_AUTH", "opaque-token");
            std::env::set_var("MCP_DOCKER_REGISTRY_USERNAME", "alice");
            std::env::set_var("MCP_DOCKER_REGISTRY_PASSWORD", "s3cret");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.registry_auth.as_deref(), Some("opaque-token"));
        clear_docker_env();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            bearer_token: Some("super_secret_token".to_string()),
            registry_auth: Some("super_secret_auth".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());
        assert!(Config::with_base_url("https://docker.example.com/").validate().is_ok());
        assert!(Config::with_base_url("not a url").validate().is_err());
        assert!(Config::with_base_url("unix:///var/run/docker.sock").validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
