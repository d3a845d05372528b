//! Swarm config endpoints.

use super::{FILTERS, VERSION};
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};
use crate::models::{ConfigSpec, IdResponse, SwarmConfig, coerce_as, decode_as};

use HttpMethod::{Delete, Get, Post};
use ParamKind::{Object, String as Str};

const CONFIG_ID: Param = Param::path("id", "ID of the config.");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_configs", Get, "/configs", "List configs")
        .params(&[FILTERS])
        .responds(ResponseShape::List),
    Endpoint::new("post_configs_create", Post, "/configs/create", "Create a config")
        .params(&[
            Param::body("Name", Str, "User-defined name of the config."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
            Param::body("Data", Str, "Base64-url-safe-encoded config data."),
            Param::body("Templating", Object, "Templating driver, if applicable."),
        ])
        .body(RequestBody::Typed(coerce_as::<ConfigSpec>))
        .responds(ResponseShape::Typed(decode_as::<IdResponse>)),
    Endpoint::new("get_configs_id", Get, "/configs/{id}", "Inspect a config")
        .params(&[CONFIG_ID])
        .responds(ResponseShape::Typed(decode_as::<SwarmConfig>)),
    Endpoint::new("delete_configs_id", Delete, "/configs/{id}", "Delete a config")
        .params(&[CONFIG_ID]),
    Endpoint::new("post_configs_id_update", Post, "/configs/{id}/update", "Update a Config")
        .params(&[
            CONFIG_ID,
            VERSION,
            Param::body("Name", Str, "User-defined name of the config."),
            Param::body(
                "Labels",
                Object,
                "User-defined key/value metadata. Only this field can be updated.",
            ),
            Param::body("Data", Str, "Base64-url-safe-encoded config data."),
        ])
        .body(RequestBody::Typed(coerce_as::<ConfigSpec>)),
];
