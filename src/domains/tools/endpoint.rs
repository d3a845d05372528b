//! Declarative endpoint descriptors.
//!
//! Every Docker Engine tool is a static [`Endpoint`]: an HTTP verb, a path
//! template, the parameters it accepts (and where each one is placed in the
//! outbound request), and the shape of its request and response bodies.
//! The generic adapter in `adapter.rs` is the only code that interprets them.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;

// ============================================================================
// Parameters
// ============================================================================

/// HTTP verbs used by the Docker Engine API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl HttpMethod {
    /// Upper-case verb as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
        }
    }
}

/// JSON type tag advertised in the tool input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Where an argument ends up in the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into the `{name}` placeholder of the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Forwarded verbatim as a request header of the same name.
    Header,
    /// Part of the JSON request body.
    Body,
}

/// A single declared tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
}

impl Param {
    /// Path parameters are always required strings.
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Path,
            required: true,
            description,
        }
    }

    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            location: ParamLocation::Query,
            required: false,
            description,
        }
    }

    pub const fn header(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Header,
            required: false,
            description,
        }
    }

    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            location: ParamLocation::Body,
            required: false,
            description,
        }
    }

    /// Mark the parameter as required in the input schema.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Whether this parameter is consumed by the URL or headers rather than the body.
    pub fn is_routed(&self) -> bool {
        !matches!(self.location, ParamLocation::Body)
    }
}

// ============================================================================
// Body and response shapes
// ============================================================================

/// Converts the body arguments into a typed request body.
pub type Coerce = fn(JsonObject) -> Result<Value, serde_json::Error>;

/// Decodes a response body into a typed value.
pub type Decode = fn(&[u8]) -> Result<Value, serde_json::Error>;

/// How the request body is produced from the arguments.
#[derive(Debug, Clone, Copy)]
pub enum RequestBody {
    /// No body is sent.
    None,
    /// Every argument not consumed by the path, query or headers, as a JSON object.
    Arguments,
    /// Same as `Arguments`, coerced through a catalog model.
    Typed(Coerce),
    /// The value of one named argument is the whole body (e.g. a JSON array).
    Field(&'static str),
}

/// Expected shape of a successful response body.
#[derive(Debug, Clone, Copy)]
pub enum ResponseShape {
    /// A JSON object.
    Object,
    /// A JSON array of objects.
    List,
    /// A JSON string.
    Text,
    /// A catalog model.
    Typed(Decode),
}

// ============================================================================
// Endpoint
// ============================================================================

/// Static description of one Docker Engine endpoint exposed as a tool.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub params: &'static [Param],
    pub body: RequestBody,
    pub response: ResponseShape,
}

impl Endpoint {
    /// Start a descriptor with no parameters, no body and an object response.
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            method,
            path,
            params: &[],
            body: RequestBody::None,
            response: ResponseShape::Object,
        }
    }

    pub const fn params(self, params: &'static [Param]) -> Self {
        Self { params, ..self }
    }

    pub const fn body(self, body: RequestBody) -> Self {
        Self { body, ..self }
    }

    pub const fn responds(self, response: ResponseShape) -> Self {
        Self { response, ..self }
    }

    /// Parameters declared at the given location, in declaration order.
    pub fn params_at(&self, location: ParamLocation) -> impl Iterator<Item = &'static Param> {
        self.params.iter().filter(move |p| p.location == location)
    }

    /// Whether the named argument is consumed by the path, query or headers.
    pub fn routes(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name && p.is_routed())
    }

    /// Names of the `{placeholder}` segments in the path template.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// JSON Schema for the tool arguments.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        let mut required = Vec::new();

        for param in self.params {
            properties.insert(
                param.name.to_string(),
                serde_json::json!({
                    "type": param.kind.as_str(),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(Value::from(param.name));
            }
        }

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// Create a Tool model for this endpoint (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Derive the conventional tool name from a verb and path template.
///
/// `POST /containers/{id}/update` becomes `post_containers_id_update`.
pub fn tool_name_for(method: HttpMethod, path: &str) -> String {
    let mut name = method.as_str().to_lowercase();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        name.push('_');
        name.push_str(segment.trim_start_matches('{').trim_end_matches('}'));
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Endpoint = Endpoint::new(
        "post_services_id_update",
        HttpMethod::Post,
        "/services/{id}/update",
        "Update a service",
    )
    .params(&[
        Param::path("id", "ID or name of service."),
        Param::query("version", ParamKind::Number, "Object version.").required(),
        Param::header("X-Registry-Auth", "Registry auth."),
        Param::body("Name", ParamKind::String, "Service name."),
    ])
    .body(RequestBody::Arguments);

    #[test]
    fn test_input_schema_lists_all_params() {
        let schema = SAMPLE.input_schema();
        assert_eq!(schema["type"], "object");

        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 4);
        assert_eq!(properties["version"]["type"], "number");
        assert_eq!(properties["id"]["type"], "string");
        assert_eq!(properties["Name"]["description"], "Service name.");

        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["id", "version"]);
    }

    #[test]
    fn test_input_schema_without_required_params() {
        let endpoint =
            Endpoint::new("get_info", HttpMethod::Get, "/info", "Get system information");
        let schema = endpoint.input_schema();
        assert!(schema.get("required").is_none());
        assert!(schema["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(SAMPLE.placeholders(), vec!["id"]);
        let plain = Endpoint::new("get_info", HttpMethod::Get, "/info", "");
        assert!(plain.placeholders().is_empty());
    }

    #[test]
    fn test_routes() {
        assert!(SAMPLE.routes("id"));
        assert!(SAMPLE.routes("version"));
        assert!(SAMPLE.routes("X-Registry-Auth"));
        assert!(!SAMPLE.routes("Name"));
        assert!(!SAMPLE.routes("Labels"));
    }

    #[test]
    fn test_tool_name_for() {
        assert_eq!(
            tool_name_for(HttpMethod::Post, "/containers/{id}/update"),
            "post_containers_id_update"
        );
        assert_eq!(tool_name_for(HttpMethod::Get, "/_ping"), "get__ping");
        assert_eq!(
            tool_name_for(HttpMethod::Head, "/containers/{id}/archive"),
            "head_containers_id_archive"
        );
    }

    #[test]
    fn test_to_tool() {
        let tool = SAMPLE.to_tool();
        assert_eq!(tool.name, "post_services_id_update");
        assert_eq!(tool.description.as_deref(), Some("Update a service"));
        assert!(tool.input_schema.contains_key("properties"));
    }
}
