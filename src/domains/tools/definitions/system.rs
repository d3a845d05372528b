//! System endpoints.

use super::FILTERS;
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};
use crate::models::{AuthConfig, AuthResponse, coerce_as, decode_as};

use HttpMethod::{Get, Post};
use ParamKind::String as Str;

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("post_auth", Post, "/auth", "Check auth configuration")
        .params(&[
            Param::body("username", Str, "Registry username."),
            Param::body("password", Str, "Registry password."),
            Param::body("email", Str, "Email address (deprecated by the registry)."),
            Param::body("serveraddress", Str, "Domain/IP of the registry, without a protocol."),
        ])
        .body(RequestBody::Typed(coerce_as::<AuthConfig>))
        .responds(ResponseShape::Typed(decode_as::<AuthResponse>)),
    Endpoint::new("get_info", Get, "/info", "Get system information"),
    Endpoint::new("get_version", Get, "/version", "Get version"),
    Endpoint::new("get__ping", Get, "/_ping", "Ping")
        .responds(ResponseShape::Text),
    Endpoint::new("get_events", Get, "/events", "Monitor events")
        .params(&[
            Param::query(
                "since",
                Str,
                "Show events created since this timestamp then stream new events.",
            ),
            Param::query(
                "until",
                Str,
                "Show events created until this timestamp then stop streaming.",
            ),
            FILTERS,
        ]),
    Endpoint::new("get_system_df", Get, "/system/df", "Get data usage information"),
];
