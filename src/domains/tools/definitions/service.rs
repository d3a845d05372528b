//! Service endpoints.

use super::{FILTERS, LOG_PARAMS, REGISTRY_AUTH, VERSION};
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};
use crate::models::{Service, ServiceSpec, ServiceUpdateResponse, coerce_as, decode_as};

use HttpMethod::{Delete, Get, Post};
use ParamKind::{Array, Boolean, Object, String as Str};

const SERVICE_ID: Param = Param::path("id", "ID or name of service.");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_services", Get, "/services", "List services")
        .params(&[
            FILTERS,
            Param::query(
                "status",
                Boolean,
                "Include service status, with count of running and desired tasks.",
            ),
        ])
        .responds(ResponseShape::List),
    Endpoint::new("post_services_create", Post, "/services/create", "Create a service")
        .params(&[
            REGISTRY_AUTH,
            Param::body("Name", Str, "Name of the service."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
            Param::body(
                "TaskTemplate",
                Object,
                "User modifiable task configuration (container spec, resources, placement).",
            ),
            Param::body(
                "Mode",
                Object,
                "Scheduling mode for the service, e.g. `{\"Replicated\": {\"Replicas\": 2}}`.",
            ),
            Param::body(
                "UpdateConfig",
                Object,
                "Specification for the update strategy of the service.",
            ),
            Param::body(
                "RollbackConfig",
                Object,
                "Specification for the rollback strategy of the service.",
            ),
            Param::body("Networks", Array, "Networks to attach the service to."),
            Param::body(
                "EndpointSpec",
                Object,
                "Properties that can be configured to access and load balance a service.",
            ),
        ])
        .body(RequestBody::Typed(coerce_as::<ServiceSpec>)),
    Endpoint::new("get_services_id", Get, "/services/{id}", "Inspect a service")
        .params(&[
            SERVICE_ID,
            Param::query("insertDefaults", Boolean, "Fill empty fields with default values."),
        ])
        .responds(ResponseShape::Typed(decode_as::<Service>)),
    Endpoint::new("delete_services_id", Delete, "/services/{id}", "Delete a service")
        .params(&[SERVICE_ID]),
    Endpoint::new("post_services_id_update", Post, "/services/{id}/update", "Update a service")
        .params(&[
            SERVICE_ID,
            VERSION,
            Param::query(
                "registryAuthFrom",
                Str,
                "Where to look for registry authorization credentials: `spec` or `previous-spec`.",
            ),
            Param::query(
                "rollback",
                Str,
                "Set to `previous` to trigger a rollback without providing a new spec.",
            ),
            REGISTRY_AUTH,
            Param::body("Name", Str, "Name of the service."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
            Param::body("TaskTemplate", Object, "User modifiable task configuration."),
            Param::body("Mode", Object, "Scheduling mode for the service."),
            Param::body(
                "UpdateConfig",
                Object,
                "Specification for the update strategy of the service.",
            ),
            Param::body(
                "RollbackConfig",
                Object,
                "Specification for the rollback strategy of the service.",
            ),
            Param::body("Networks", Array, "Networks to attach the service to."),
            Param::body(
                "EndpointSpec",
                Object,
                "Properties that can be configured to access and load balance a service.",
            ),
        ])
        .body(RequestBody::Typed(coerce_as::<ServiceSpec>))
        .responds(ResponseShape::Typed(decode_as::<ServiceUpdateResponse>)),
    Endpoint::new("get_services_id_logs", Get, "/services/{id}/logs", "Get service logs")
        .params(LOG_PARAMS)
        .responds(ResponseShape::Text),
];
