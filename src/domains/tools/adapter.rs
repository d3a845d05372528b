//! Generic Docker Engine request adapter.
//!
//! One adapter serves every tool: it reads the endpoint descriptor, turns the
//! argument map into exactly one HTTP request against the configured base
//! URL, and shapes the response into a tool result. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::endpoint::{Endpoint, HttpMethod, ParamLocation, RequestBody, ResponseShape};
use super::error::ToolError;
use crate::core::config::Config;

const JSON_MIME: &str = "application/json";
const REGISTRY_AUTH_HEADER: &str = "X-Registry-Auth";

/// A fully resolved outbound request, before it is handed to the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Headers besides `Accept` and `Content-Type`.
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Translates tool calls into Docker Engine API requests.
#[derive(Clone)]
pub struct DockerAdapter {
    client: reqwest::Client,
    config: Arc<Config>,
}

impl DockerAdapter {
    /// Create an adapter with its own connection pool.
    pub fn new(config: Arc<Config>) -> Result<Self, ToolError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = config.docker.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ToolError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create an adapter around an existing client.
    pub fn with_client(config: Arc<Config>, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    /// Resolve URL, headers and body for one call.
    ///
    /// Fails without touching the network when a path parameter is missing or
    /// not a string, when another required parameter is absent, or when the
    /// body cannot be coerced into the endpoint's request type.
    pub fn prepare(
        &self,
        endpoint: &Endpoint,
        args: &JsonObject,
    ) -> Result<PreparedRequest, ToolError> {
        let path = substitute_path(endpoint, args)?;

        let required = endpoint
            .params
            .iter()
            .filter(|p| p.required && p.location != ParamLocation::Path);
        for param in required {
            if present(args, param.name).is_none() {
                return Err(ToolError::MissingParameter(param.name.to_string()));
            }
        }

        let query = self.render_query(endpoint, args)?;
        let mut url = format!("{}{}", self.config.docker.base_url, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        Ok(PreparedRequest {
            method: endpoint.method,
            url,
            headers: self.headers(endpoint, args),
            body: request_body(endpoint, args)?,
        })
    }

    /// Run one tool call end to end. Every failure becomes an error-flagged result.
    #[instrument(skip(self, endpoint, args), fields(tool = endpoint.name))]
    pub async fn invoke(&self, endpoint: &Endpoint, args: JsonObject) -> CallToolResult {
        match self.execute(endpoint, args).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!("{} failed: {}", endpoint.name, e);
                e.into_call_result()
            }
        }
    }

    async fn execute(&self, endpoint: &Endpoint, args: JsonObject) -> Result<String, ToolError> {
        let prepared = self.prepare(endpoint, &args)?;
        debug!("{} {}", prepared.method.as_str(), prepared.url);

        let mut builder = self
            .client
            .request(prepared.method.to_reqwest(), &prepared.url)
            .header(ACCEPT, JSON_MIME);

        if let Some(token) = &self.config.credentials.bearer_token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        for (name, value) in &prepared.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &prepared.body {
            let bytes = serde_json::to_vec(body).map_err(ToolError::BodyEncoding)?;
            builder = builder.header(CONTENT_TYPE, JSON_MIME).body(bytes);
        }

        let request = builder.build().map_err(ToolError::RequestBuild)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(ToolError::Transport)?;

        let status = response.status().as_u16();
        info!("{} -> HTTP {}", endpoint.name, status);

        let body = response.bytes().await.map_err(ToolError::ResponseRead)?;
        shape_response(endpoint.response, status, &body)
    }

    /// Render `key=value` pairs for the provided query arguments, in declaration order.
    fn render_query(&self, endpoint: &Endpoint, args: &JsonObject) -> Result<String, ToolError> {
        let pairs: Vec<(&str, String)> = endpoint
            .params_at(ParamLocation::Query)
            .filter_map(|p| present(args, p.name).map(|v| (p.name, scalar_text(v))))
            .collect();

        if self.config.docker.encode_query {
            return serde_urlencoded::to_string(&pairs)
                .map_err(|e| ToolError::internal(format!("Failed to encode query: {}", e)));
        }

        Ok(pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("&"))
    }

    /// Header parameters from the arguments, falling back to the configured
    /// registry credentials for endpoints that accept `X-Registry-Auth`.
    fn headers(&self, endpoint: &Endpoint, args: &JsonObject) -> Vec<(String, String)> {
        endpoint
            .params_at(ParamLocation::Header)
            .filter_map(|p| {
                let value = match present(args, p.name) {
                    Some(value) => Some(scalar_text(value)),
                    None if p.name == REGISTRY_AUTH_HEADER => {
                        self.config.credentials.registry_auth.clone()
                    }
                    None => None,
                };
                value.map(|v| (p.name.to_string(), v))
            })
            .collect()
    }
}

/// Replace every `{name}` placeholder with its string argument.
fn substitute_path(endpoint: &Endpoint, args: &JsonObject) -> Result<String, ToolError> {
    let mut path = endpoint.path.to_string();
    for param in endpoint.params_at(ParamLocation::Path) {
        let value = match args.get(param.name) {
            None | Some(Value::Null) => {
                return Err(ToolError::MissingPathParameter(param.name.to_string()));
            }
            Some(Value::String(value)) => value,
            Some(_) => return Err(ToolError::InvalidPathParameter(param.name.to_string())),
        };
        path = path.replace(&format!("{{{}}}", param.name), value);
    }
    Ok(path)
}

fn request_body(endpoint: &Endpoint, args: &JsonObject) -> Result<Option<Value>, ToolError> {
    match endpoint.body {
        RequestBody::None => Ok(None),
        RequestBody::Arguments => Ok(Some(Value::Object(body_arguments(endpoint, args)))),
        RequestBody::Typed(coerce) => coerce(body_arguments(endpoint, args))
            .map(Some)
            .map_err(ToolError::BodyConversion),
        RequestBody::Field(name) => Ok(present(args, name).cloned()),
    }
}

/// Arguments not consumed by the path, query string or headers.
fn body_arguments(endpoint: &Endpoint, args: &JsonObject) -> JsonObject {
    args.iter()
        .filter(|(name, _)| !endpoint.routes(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// An argument that is set to something other than `null`.
fn present<'a>(args: &'a JsonObject, name: &str) -> Option<&'a Value> {
    args.get(name).filter(|v| !v.is_null())
}

/// Strings are sent as-is; anything else as compact JSON (`true`, `10`, `{"a":["b"]}`).
///
/// Whole-valued floats lose their fraction (`5.0` becomes `5`): the daemon
/// parses integer parameters strictly.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Turn a raw response into tool output.
///
/// Status >= 400 is an error carrying the raw body. A successful body is
/// decoded into the expected shape and pretty-printed; if it does not decode,
/// the raw text is returned instead.
pub fn shape_response(shape: ResponseShape, status: u16, body: &[u8]) -> Result<String, ToolError> {
    if status >= 400 {
        return Err(ToolError::Api {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    let decoded = match shape {
        ResponseShape::Object => serde_json::from_slice::<JsonObject>(body).map(Value::Object),
        ResponseShape::List => serde_json::from_slice::<Vec<JsonObject>>(body)
            .map(|items| Value::Array(items.into_iter().map(Value::Object).collect())),
        ResponseShape::Text => serde_json::from_slice::<String>(body).map(Value::String),
        ResponseShape::Typed(decode) => decode(body),
    };

    match decoded {
        Ok(value) => format_value(&value),
        Err(e) => {
            debug!("Response is not the expected JSON shape ({}), returning raw text", e);
            Ok(String::from_utf8_lossy(body).into_owned())
        }
    }
}

/// 2-space indented JSON.
pub fn format_value(value: &Value) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(ToolError::Format)
}
