//! Tool definitions module.
//!
//! Every Docker Engine endpoint exposed as a tool, one module per resource
//! group. Each module exports an `ENDPOINTS` table of static descriptors.

pub mod config;
pub mod container;
pub mod distribution;
pub mod exec;
pub mod image;
pub mod network;
pub mod node;
pub mod plugin;
pub mod secret;
pub mod service;
pub mod swarm;
pub mod system;
pub mod task;
pub mod volume;

use super::endpoint::{Endpoint, Param, ParamKind};

// ============================================================================
// Shared parameters
// ============================================================================

const FILTERS: Param = Param::query(
    "filters",
    ParamKind::String,
    "Filters to process on the list, encoded as JSON (a `map[string][]string`), e.g. `{\"label\": [\"env=prod\"]}`.",
);

const REGISTRY_AUTH: Param = Param::header(
    "X-Registry-Auth",
    "Base64url-encoded registry auth config (`{\"username\": ..., \"password\": ..., \"serveraddress\": ...}`). Defaults to the server's configured credentials.",
);

const VERSION: Param = Param::query(
    "version",
    ParamKind::Number,
    "The version number of the object being updated. Required to avoid conflicting writes.",
)
.required();

/// Parameters shared by the service and task log endpoints.
const LOG_PARAMS: &[Param] = &[
    Param::path("id", "ID of the service or task."),
    Param::query("details", ParamKind::Boolean, "Show extra details provided to logs."),
    Param::query("follow", ParamKind::Boolean, "Keep connection after returning logs."),
    Param::query("stdout", ParamKind::Boolean, "Return logs from `stdout`."),
    Param::query("stderr", ParamKind::Boolean, "Return logs from `stderr`."),
    Param::query(
        "since",
        ParamKind::Number,
        "Only return logs since this time, as a UNIX timestamp.",
    ),
    Param::query("timestamps", ParamKind::Boolean, "Add timestamps to every log line."),
    Param::query(
        "tail",
        ParamKind::String,
        "Only return this number of log lines from the end of the logs. Specify as an integer or `all`.",
    ),
];

// ============================================================================
// Catalog
// ============================================================================

/// All endpoint groups, in listing order.
pub const GROUPS: &[&[Endpoint]] = &[
    container::ENDPOINTS,
    image::ENDPOINTS,
    network::ENDPOINTS,
    volume::ENDPOINTS,
    exec::ENDPOINTS,
    swarm::ENDPOINTS,
    node::ENDPOINTS,
    service::ENDPOINTS,
    task::ENDPOINTS,
    secret::ENDPOINTS,
    config::ENDPOINTS,
    plugin::ENDPOINTS,
    system::ENDPOINTS,
    distribution::ENDPOINTS,
];

/// Iterate over every endpoint descriptor.
pub fn all_endpoints() -> impl Iterator<Item = &'static Endpoint> {
    GROUPS.iter().flat_map(|group| group.iter())
}

/// Look up an endpoint by tool name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    all_endpoints().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::endpoint::{ParamLocation, RequestBody, tool_name_for};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all_endpoints().count(), 95);
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in all_endpoints() {
            assert!(seen.insert(endpoint.name), "duplicate tool name {}", endpoint.name);
        }
    }

    #[test]
    fn test_names_follow_verb_and_path() {
        for endpoint in all_endpoints() {
            assert_eq!(
                endpoint.name,
                tool_name_for(endpoint.method, endpoint.path),
                "unexpected name for {} {}",
                endpoint.method.as_str(),
                endpoint.path
            );
        }
    }

    #[test]
    fn test_placeholders_match_path_params() {
        for endpoint in all_endpoints() {
            let declared: Vec<_> = endpoint
                .params_at(ParamLocation::Path)
                .map(|p| p.name)
                .collect();
            assert_eq!(endpoint.placeholders(), declared, "path params of {}", endpoint.name);

            for param in endpoint.params_at(ParamLocation::Path) {
                assert!(param.required);
            }
        }
    }

    #[test]
    fn test_param_names_unique_per_endpoint() {
        for endpoint in all_endpoints() {
            let mut seen = HashSet::new();
            for param in endpoint.params {
                assert!(seen.insert(param.name), "{} declares {} twice", endpoint.name, param.name);
            }
        }
    }

    #[test]
    fn test_field_bodies_name_a_declared_body_param() {
        for endpoint in all_endpoints() {
            if let RequestBody::Field(field) = endpoint.body {
                assert!(
                    endpoint
                        .params_at(ParamLocation::Body)
                        .any(|p| p.name == field),
                    "{} sends undeclared field {}",
                    endpoint.name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_find() {
        let endpoint = find("post_containers_id_update").unwrap();
        assert_eq!(endpoint.path, "/containers/{id}/update");
        assert!(find("get__ping").is_some());
        assert!(find("post_containers_id_teleport").is_none());
    }
}
