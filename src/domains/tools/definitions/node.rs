//! Node endpoints.

use super::{FILTERS, VERSION};
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};
use crate::models::{NodeSpec, coerce_as};

use HttpMethod::{Delete, Get, Post};
use ParamKind::{Boolean, Object, String as Str};

const NODE_ID: Param = Param::path("id", "The ID or name of the node.");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_nodes", Get, "/nodes", "List nodes")
        .params(&[FILTERS])
        .responds(ResponseShape::List),
    Endpoint::new("get_nodes_id", Get, "/nodes/{id}", "Inspect a node")
        .params(&[NODE_ID]),
    Endpoint::new("delete_nodes_id", Delete, "/nodes/{id}", "Delete a node")
        .params(&[
            NODE_ID,
            Param::query("force", Boolean, "Force remove a node from the swarm."),
        ]),
    Endpoint::new("post_nodes_id_update", Post, "/nodes/{id}/update", "Update a node")
        .params(&[
            NODE_ID,
            VERSION,
            Param::body("Name", Str, "Name for the node."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
            Param::body("Role", Str, "Role of the node: `worker` or `manager`."),
            Param::body(
                "Availability",
                Str,
                "Availability of the node: `active`, `pause` or `drain`.",
            ),
        ])
        .body(RequestBody::Typed(coerce_as::<NodeSpec>)),
];
