//! Schema/Type catalog for the Docker Engine API.
//!
//! These types mirror a subset of the Docker Engine OpenAPI definitions. They
//! are only used as typing aids: some endpoints coerce their body arguments
//! through a model (dropping unknown keys) or decode their responses into one.
//! Wire names are the PascalCase names used by the daemon, absent optional
//! fields are omitted, and unknown fields are ignored on input.
//!
//! Every model also derives `JsonSchema`; the catalog is published as MCP
//! resources (see `domains::resources`).

mod common;
mod container;
mod image;
mod secret;
mod swarm;
mod system;
mod volume;

pub use common::{Driver, ErrorResponse, IdResponse, ObjectVersion};
pub use container::{ContainerConfig, HealthConfig};
pub use image::ImageSummary;
pub use secret::{ConfigSpec, Secret, SecretSpec, SwarmConfig};
pub use swarm::{NodeSpec, Service, ServiceSpec, ServiceUpdateResponse};
pub use system::{AuthConfig, AuthResponse};
pub use volume::{Volume, VolumeCreateOptions};

use rmcp::model::JsonObject;
use schemars::{JsonSchema, Schema};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Coerce a flat argument map into the wire form of `T`.
///
/// Unknown keys are dropped and missing optional fields are omitted. A key
/// whose value has the wrong type fails the conversion.
pub fn coerce_as<T>(arguments: JsonObject) -> Result<Value, serde_json::Error>
where
    T: DeserializeOwned + Serialize,
{
    let typed: T = serde_json::from_value(Value::Object(arguments))?;
    serde_json::to_value(typed)
}

/// Decode a response body as `T` and return its normalized JSON form.
pub fn decode_as<T>(body: &[u8]) -> Result<Value, serde_json::Error>
where
    T: DeserializeOwned + Serialize,
{
    let typed: T = serde_json::from_slice(body)?;
    serde_json::to_value(typed)
}

/// A named entry of the published schema catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub schema: fn() -> Schema,
}

fn schema_of<T: JsonSchema>() -> Schema {
    schemars::schema_for!(T)
}

fn entry<T: JsonSchema>(name: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        schema: schema_of::<T>,
    }
}

/// All catalog models, by Docker schema name.
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        entry::<AuthConfig>("AuthConfig"),
        entry::<AuthResponse>("AuthResponse"),
        entry::<SwarmConfig>("Config"),
        entry::<ConfigSpec>("ConfigSpec"),
        entry::<ContainerConfig>("ContainerConfig"),
        entry::<Driver>("Driver"),
        entry::<ErrorResponse>("ErrorResponse"),
        entry::<HealthConfig>("HealthConfig"),
        entry::<IdResponse>("IdResponse"),
        entry::<ImageSummary>("ImageSummary"),
        entry::<NodeSpec>("NodeSpec"),
        entry::<ObjectVersion>("ObjectVersion"),
        entry::<Secret>("Secret"),
        entry::<SecretSpec>("SecretSpec"),
        entry::<Service>("Service"),
        entry::<ServiceSpec>("ServiceSpec"),
        entry::<ServiceUpdateResponse>("ServiceUpdateResponse"),
        entry::<Volume>("Volume"),
        entry::<VolumeCreateOptions>("VolumeCreateOptions"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_coerce_drops_unknown_fields() {
        let args = object(json!({
            "Image": "alpine:3.20",
            "Env": ["A=1"],
            "container": "web",
            "pause": true
        }));
        let body = coerce_as::<ContainerConfig>(args).unwrap();
        assert_eq!(body, json!({ "Image": "alpine:3.20", "Env": ["A=1"] }));
    }

    #[test]
    fn test_coerce_rejects_wrong_type() {
        let args = object(json!({ "Tty": "yes" }));
        assert!(coerce_as::<ContainerConfig>(args).is_err());
    }

    #[test]
    fn test_decode_as_typed() {
        let body = br#"{"Id":"abc123","Warnings":[]}"#;
        let value = decode_as::<IdResponse>(body).unwrap();
        assert_eq!(value["Id"], "abc123");
    }

    #[test]
    fn test_decode_as_rejects_wrong_shape() {
        assert!(decode_as::<IdResponse>(b"[1,2,3]").is_err());
        assert!(decode_as::<IdResponse>(b"not json").is_err());
    }

    #[test]
    fn test_catalog_names_unique_and_schemas_build() {
        let entries = catalog();
        let mut names: Vec<_> = entries.iter().map(|e| e.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), entries.len());

        for entry in entries {
            let schema = serde_json::to_value((entry.schema)()).unwrap();
            assert!(schema.is_object(), "schema for {} is not an object", entry.name);
        }
    }
}
