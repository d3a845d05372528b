//! Plugin endpoints.

use super::{FILTERS, REGISTRY_AUTH};
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};

use HttpMethod::{Delete, Get, Post};
use ParamKind::{Array, Boolean, Number, String as Str};

const PLUGIN_NAME: Param = Param::path(
    "name",
    "The name of the plugin. The `:latest` tag is optional, and is the default if omitted.",
);

const REMOTE: Param = Param::query(
    "remote",
    Str,
    "Remote reference for the plugin to install. The `:latest` tag is optional.",
)
.required();

const PRIVILEGES: Param = Param::body(
    "privileges",
    Array,
    "Privileges to grant, as returned by `get_plugins_privileges`: `[{\"Name\": ..., \"Description\": ..., \"Value\": [...]}]`.",
);

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_plugins", Get, "/plugins", "List plugins")
        .params(&[FILTERS])
        .responds(ResponseShape::List),
    Endpoint::new("get_plugins_privileges", Get, "/plugins/privileges", "Get plugin privileges")
        .params(&[REMOTE])
        .responds(ResponseShape::List),
    Endpoint::new("post_plugins_pull", Post, "/plugins/pull", "Install a plugin")
        .params(&[
            REMOTE,
            Param::query("name", Str, "Local name for the pulled plugin."),
            REGISTRY_AUTH,
            PRIVILEGES,
        ])
        .body(RequestBody::Field("privileges")),
    Endpoint::new("get_plugins_name_json", Get, "/plugins/{name}/json", "Inspect a plugin")
        .params(&[PLUGIN_NAME]),
    Endpoint::new("delete_plugins_name", Delete, "/plugins/{name}", "Remove a plugin")
        .params(&[
            PLUGIN_NAME,
            Param::query(
                "force",
                Boolean,
                "Disable the plugin before removing. This may result in issues if the plugin is in use by a container.",
            ),
        ]),
    Endpoint::new("post_plugins_name_enable", Post, "/plugins/{name}/enable", "Enable a plugin")
        .params(&[
            PLUGIN_NAME,
            Param::query("timeout", Number, "Set the HTTP client timeout (in seconds)."),
        ]),
    Endpoint::new("post_plugins_name_disable", Post, "/plugins/{name}/disable", "Disable a plugin")
        .params(&[
            PLUGIN_NAME,
            Param::query("force", Boolean, "Force disable a plugin even if still in use."),
        ]),
    Endpoint::new("post_plugins_name_upgrade", Post, "/plugins/{name}/upgrade", "Upgrade a plugin")
        .params(&[PLUGIN_NAME, REMOTE, REGISTRY_AUTH, PRIVILEGES])
        .body(RequestBody::Field("privileges")),
    Endpoint::new("post_plugins_name_push", Post, "/plugins/{name}/push", "Push a plugin")
        .params(&[PLUGIN_NAME]),
    Endpoint::new("post_plugins_name_set", Post, "/plugins/{name}/set", "Configure a plugin")
        .params(&[
            PLUGIN_NAME,
            Param::body("settings", Array, "Settings to apply, e.g. `[\"DEBUG=1\"]`."),
        ])
        .body(RequestBody::Field("settings")),
];
