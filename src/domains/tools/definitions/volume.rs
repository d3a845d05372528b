//! Volume endpoints.

use super::FILTERS;
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};
use crate::models::{Volume, VolumeCreateOptions, coerce_as, decode_as};

use HttpMethod::{Delete, Get, Post};
use ParamKind::{Boolean, Object, String as Str};

const VOLUME_NAME: Param = Param::path("name", "Volume name or ID.");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_volumes", Get, "/volumes", "List volumes")
        .params(&[FILTERS]),
    Endpoint::new("post_volumes_create", Post, "/volumes/create", "Create a volume")
        .params(&[
            Param::body(
                "Name",
                Str,
                "The new volume's name. If not specified, Docker generates a name.",
            ),
            Param::body("Driver", Str, "Name of the volume driver to use."),
            Param::body("DriverOpts", Object, "A mapping of driver options and values."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
        ])
        .body(RequestBody::Typed(coerce_as::<VolumeCreateOptions>))
        .responds(ResponseShape::Typed(decode_as::<Volume>)),
    Endpoint::new("get_volumes_name", Get, "/volumes/{name}", "Inspect a volume")
        .params(&[VOLUME_NAME])
        .responds(ResponseShape::Typed(decode_as::<Volume>)),
    Endpoint::new("delete_volumes_name", Delete, "/volumes/{name}", "Remove a volume")
        .params(&[
            VOLUME_NAME,
            Param::query("force", Boolean, "Force the removal of the volume."),
        ]),
    Endpoint::new("post_volumes_prune", Post, "/volumes/prune", "Delete unused volumes")
        .params(&[FILTERS]),
];
