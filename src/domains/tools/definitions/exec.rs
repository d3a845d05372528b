//! Exec endpoints.

use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};
use crate::models::{IdResponse, decode_as};

use HttpMethod::{Get, Post};
use ParamKind::{Array, Boolean, Number, String as Str};

const CONTAINER_ID: Param = Param::path("id", "ID or name of the container.");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "post_containers_id_exec",
        Post,
        "/containers/{id}/exec",
        "Create an exec instance",
    )
    .params(&[
        CONTAINER_ID,
        Param::body("Cmd", Array, "Command to run, as an array of strings.").required(),
        Param::body("AttachStdin", Boolean, "Attach to `stdin` of the exec command."),
        Param::body("AttachStdout", Boolean, "Attach to `stdout` of the exec command."),
        Param::body("AttachStderr", Boolean, "Attach to `stderr` of the exec command."),
        Param::body("DetachKeys", Str, "Override the key sequence for detaching a container."),
        Param::body("Tty", Boolean, "Allocate a pseudo-TTY."),
        Param::body(
            "Env",
            Array,
            "A list of environment variables in the form `[\"VAR=value\", ...]`.",
        ),
        Param::body("Privileged", Boolean, "Runs the exec process with extended privileges."),
        Param::body(
            "User",
            Str,
            "The user, and optionally, group to run the exec process inside the container.",
        ),
        Param::body(
            "WorkingDir",
            Str,
            "The working directory for the exec process inside the container.",
        ),
    ])
    .body(RequestBody::Arguments)
    .responds(ResponseShape::Typed(decode_as::<IdResponse>)),
    Endpoint::new("post_exec_id_start", Post, "/exec/{id}/start", "Start an exec instance")
        .params(&[
            Param::path("id", "Exec instance ID."),
            Param::body("Detach", Boolean, "Detach from the command."),
            Param::body("Tty", Boolean, "Allocate a pseudo-TTY."),
        ])
        .body(RequestBody::Arguments)
        .responds(ResponseShape::Text),
    Endpoint::new("post_exec_id_resize", Post, "/exec/{id}/resize", "Resize an exec instance")
        .params(&[
            Param::path("id", "Exec instance ID."),
            Param::query("h", Number, "Height of the TTY session in characters."),
            Param::query("w", Number, "Width of the TTY session in characters."),
        ]),
    Endpoint::new("get_exec_id_json", Get, "/exec/{id}/json", "Inspect an exec instance")
        .params(&[Param::path("id", "Exec instance ID.")]),
];
