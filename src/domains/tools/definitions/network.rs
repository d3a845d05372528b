//! Network endpoints.

use super::FILTERS;
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};

use HttpMethod::{Delete, Get, Post};
use ParamKind::{Boolean, Object, String as Str};

const NETWORK_ID: Param = Param::path("id", "Network ID or name.");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_networks", Get, "/networks", "List networks")
        .params(&[FILTERS])
        .responds(ResponseShape::List),
    Endpoint::new("get_networks_id", Get, "/networks/{id}", "Inspect a network")
        .params(&[
            NETWORK_ID,
            Param::query("verbose", Boolean, "Detailed inspect output for troubleshooting."),
            Param::query(
                "scope",
                Str,
                "Filter the network by scope (`swarm`, `global`, or `local`).",
            ),
        ]),
    Endpoint::new("delete_networks_id", Delete, "/networks/{id}", "Remove a network")
        .params(&[NETWORK_ID]),
    Endpoint::new("post_networks_create", Post, "/networks/create", "Create a network")
        .params(&[
            Param::body("Name", Str, "The network's name.").required(),
            Param::body("Driver", Str, "Name of the network driver plugin to use."),
            Param::body(
                "Scope",
                Str,
                "The level at which the network exists (`swarm` or `local`).",
            ),
            Param::body("Internal", Boolean, "Restrict external access to the network."),
            Param::body(
                "Attachable",
                Boolean,
                "Globally scoped network is manually attachable by regular containers.",
            ),
            Param::body(
                "Ingress",
                Boolean,
                "Ingress network is the network which provides the routing-mesh in swarm mode.",
            ),
            Param::body("EnableIPv6", Boolean, "Enable IPv6 on the network."),
            Param::body("IPAM", Object, "IP address management configuration."),
            Param::body("Options", Object, "Network specific options to be used by the drivers."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
        ])
        .body(RequestBody::Arguments),
    Endpoint::new(
        "post_networks_id_connect",
        Post,
        "/networks/{id}/connect",
        "Connect a container to a network",
    )
    .params(&[
        NETWORK_ID,
        Param::body(
            "Container",
            Str,
            "The ID or name of the container to connect to the network.",
        )
        .required(),
        Param::body(
            "EndpointConfig",
            Object,
            "Configuration for the network endpoint (aliases, IPAM config, links).",
        ),
    ])
    .body(RequestBody::Arguments),
    Endpoint::new(
        "post_networks_id_disconnect",
        Post,
        "/networks/{id}/disconnect",
        "Disconnect a container from a network",
    )
    .params(&[
        NETWORK_ID,
        Param::body(
            "Container",
            Str,
            "The ID or name of the container to disconnect from the network.",
        )
        .required(),
        Param::body("Force", Boolean, "Force the container to disconnect from the network."),
    ])
    .body(RequestBody::Arguments),
    Endpoint::new("post_networks_prune", Post, "/networks/prune", "Delete unused networks")
        .params(&[FILTERS]),
];
