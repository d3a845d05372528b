//! Container endpoints.

use super::FILTERS;
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};

use HttpMethod::{Delete, Get, Head, Post};
use ParamKind::{Array, Boolean, Number, Object, String as Str};

const CONTAINER_ID: Param = Param::path("id", "ID or name of the container.");

const SIGNAL: Param = Param::query(
    "signal",
    Str,
    "Signal to send to the container as an integer or string (e.g. `SIGINT`).",
);

const STOP_TIMEOUT: Param = Param::query(
    "t",
    Number,
    "Number of seconds to wait before killing the container.",
);

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_containers_json", Get, "/containers/json", "List containers")
        .params(&[
            Param::query(
                "all",
                Boolean,
                "Return all containers. By default, only running containers are shown.",
            ),
            Param::query(
                "limit",
                Number,
                "Return this number of most recently created containers, including non-running ones.",
            ),
            Param::query(
                "size",
                Boolean,
                "Return the size of container as fields `SizeRw` and `SizeRootFs`.",
            ),
            FILTERS,
        ])
        .responds(ResponseShape::List),
    Endpoint::new("post_containers_create", Post, "/containers/create", "Create a container")
        .params(&[
            Param::query(
                "name",
                Str,
                "Assign the specified name to the container. Must match `/?[a-zA-Z0-9][a-zA-Z0-9_.-]+`.",
            ),
            Param::query(
                "platform",
                Str,
                "Platform in the format `os[/arch[/variant]]` used for image lookup.",
            ),
            Param::body("Image", Str, "The name (or reference) of the image to use.").required(),
            Param::body("Cmd", Array, "Command to run specified as an array of strings."),
            Param::body("Entrypoint", Array, "The entry point for the container."),
            Param::body(
                "Env",
                Array,
                "A list of environment variables in the form `[\"VAR=value\", ...]`.",
            ),
            Param::body("Labels", Object, "User-defined key/value metadata."),
            Param::body(
                "ExposedPorts",
                Object,
                "An object mapping ports to an empty object, e.g. `{\"80/tcp\": {}}`.",
            ),
            Param::body("Hostname", Str, "The hostname to use for the container."),
            Param::body("User", Str, "The user that commands are run as inside the container."),
            Param::body("WorkingDir", Str, "The working directory for commands to run in."),
            Param::body("Tty", Boolean, "Attach standard streams to a TTY."),
            Param::body("OpenStdin", Boolean, "Open `stdin`."),
            Param::body("StopSignal", Str, "Signal to stop a container."),
            Param::body(
                "Volumes",
                Object,
                "An object mapping mount point paths inside the container to empty objects.",
            ),
            Param::body(
                "HostConfig",
                Object,
                "Container configuration that depends on the host (binds, ports, resources, restart policy).",
            ),
            Param::body(
                "NetworkingConfig",
                Object,
                "Networking configuration, keyed by `EndpointsConfig`.",
            ),
        ])
        .body(RequestBody::Arguments),
    Endpoint::new("get_containers_id_json", Get, "/containers/{id}/json", "Inspect a container")
        .params(&[
            CONTAINER_ID,
            Param::query(
                "size",
                Boolean,
                "Return the size of container as fields `SizeRw` and `SizeRootFs`.",
            ),
        ]),
    Endpoint::new(
        "get_containers_id_top",
        Get,
        "/containers/{id}/top",
        "List processes running inside a container",
    )
    .params(&[
        CONTAINER_ID,
        Param::query("ps_args", Str, "The arguments to pass to `ps`. For example, `aux`."),
    ]),
    Endpoint::new("get_containers_id_logs", Get, "/containers/{id}/logs", "Get container logs")
        .params(&[
            CONTAINER_ID,
            Param::query("follow", Boolean, "Keep connection after returning logs."),
            Param::query("stdout", Boolean, "Return logs from `stdout`."),
            Param::query("stderr", Boolean, "Return logs from `stderr`."),
            Param::query("since", Number, "Only return logs since this time, as a UNIX timestamp."),
            Param::query(
                "until",
                Number,
                "Only return logs before this time, as a UNIX timestamp.",
            ),
            Param::query("timestamps", Boolean, "Add timestamps to every log line."),
            Param::query(
                "tail",
                Str,
                "Only return this number of log lines from the end of the logs. Specify as an integer or `all`.",
            ),
        ])
        .responds(ResponseShape::Text),
    Endpoint::new(
        "get_containers_id_changes",
        Get,
        "/containers/{id}/changes",
        "Get changes on a container's filesystem",
    )
    .params(&[CONTAINER_ID])
    .responds(ResponseShape::List),
    Endpoint::new(
        "get_containers_id_stats",
        Get,
        "/containers/{id}/stats",
        "Get container stats based on resource usage",
    )
    .params(&[
        CONTAINER_ID,
        Param::query(
            "stream",
            Boolean,
            "Stream the output. If false, the stats will be output once and then it will disconnect.",
        ),
        Param::query(
            "one-shot",
            Boolean,
            "Only get a single stat instead of waiting for 2 cycles. Must be used with `stream=false`.",
        ),
    ]),
    Endpoint::new(
        "post_containers_id_resize",
        Post,
        "/containers/{id}/resize",
        "Resize the TTY for a container",
    )
    .params(&[
        CONTAINER_ID,
        Param::query("h", Number, "Height of the TTY session in characters."),
        Param::query("w", Number, "Width of the TTY session in characters."),
    ]),
    Endpoint::new("post_containers_id_start", Post, "/containers/{id}/start", "Start a container")
        .params(&[
            CONTAINER_ID,
            Param::query(
                "detachKeys",
                Str,
                "Override the key sequence for detaching a container, e.g. `ctrl-p,ctrl-q`.",
            ),
        ]),
    Endpoint::new("post_containers_id_stop", Post, "/containers/{id}/stop", "Stop a container")
        .params(&[CONTAINER_ID, SIGNAL, STOP_TIMEOUT]),
    Endpoint::new(
        "post_containers_id_restart",
        Post,
        "/containers/{id}/restart",
        "Restart a container",
    )
    .params(&[CONTAINER_ID, SIGNAL, STOP_TIMEOUT]),
    Endpoint::new("post_containers_id_kill", Post, "/containers/{id}/kill", "Kill a container")
        .params(&[
            CONTAINER_ID,
            Param::query("signal", Str, "Signal to send to the container, e.g. `SIGKILL` or `9`."),
        ]),
    Endpoint::new(
        "post_containers_id_update",
        Post,
        "/containers/{id}/update",
        "Update a container",
    )
    .params(&[
        CONTAINER_ID,
        Param::body("CpuShares", Number, "CPU shares (relative weight)."),
        Param::body("Memory", Number, "Memory limit in bytes."),
        Param::body("MemoryReservation", Number, "Memory soft limit in bytes."),
        Param::body(
            "MemorySwap",
            Number,
            "Total memory limit (memory + swap). Set as `-1` to enable unlimited swap.",
        ),
        Param::body("NanoCpus", Number, "CPU quota in units of 10<sup>-9</sup> CPUs."),
        Param::body("CpuPeriod", Number, "The length of a CPU period in microseconds."),
        Param::body(
            "CpuQuota",
            Number,
            "Microseconds of CPU time that the container can get in a CPU period.",
        ),
        Param::body("CpusetCpus", Str, "CPUs in which to allow execution, e.g. `0-3`, `0,1`."),
        Param::body("BlkioWeight", Number, "Block IO weight (relative weight)."),
        Param::body(
            "PidsLimit",
            Number,
            "Tune a container's PIDs limit. Set `0` or `-1` for unlimited.",
        ),
        Param::body(
            "RestartPolicy",
            Object,
            "The behavior to apply when the container exits, e.g. `{\"Name\": \"on-failure\", \"MaximumRetryCount\": 3}`.",
        ),
    ])
    .body(RequestBody::Arguments),
    Endpoint::new(
        "post_containers_id_rename",
        Post,
        "/containers/{id}/rename",
        "Rename a container",
    )
    .params(&[
        CONTAINER_ID,
        Param::query("name", Str, "New name for the container.").required(),
    ]),
    Endpoint::new("post_containers_id_pause", Post, "/containers/{id}/pause", "Pause a container")
        .params(&[CONTAINER_ID]),
    Endpoint::new(
        "post_containers_id_unpause",
        Post,
        "/containers/{id}/unpause",
        "Unpause a container",
    )
    .params(&[CONTAINER_ID]),
    Endpoint::new(
        "get_containers_id_attach_ws",
        Get,
        "/containers/{id}/attach/ws",
        "Attach to a container via a websocket",
    )
    .params(&[
        CONTAINER_ID,
        Param::query("detachKeys", Str, "Override the key sequence for detaching a container."),
        Param::query("logs", Boolean, "Return logs."),
        Param::query("stream", Boolean, "Return stream."),
        Param::query("stdin", Boolean, "Attach to `stdin`."),
        Param::query("stdout", Boolean, "Attach to `stdout`."),
        Param::query("stderr", Boolean, "Attach to `stderr`."),
    ]),
    Endpoint::new("post_containers_id_wait", Post, "/containers/{id}/wait", "Wait for a container")
        .params(&[
            CONTAINER_ID,
            Param::query(
                "condition",
                Str,
                "Wait until a container state reaches the given condition: `not-running`, `next-exit` or `removed`.",
            ),
        ]),
    Endpoint::new("delete_containers_id", Delete, "/containers/{id}", "Remove a container")
        .params(&[
            CONTAINER_ID,
            Param::query("v", Boolean, "Remove anonymous volumes associated with the container."),
            Param::query(
                "force",
                Boolean,
                "If the container is running, kill it before removing it.",
            ),
            Param::query(
                "link",
                Boolean,
                "Remove the specified link associated with the container.",
            ),
        ]),
    Endpoint::new(
        "head_containers_id_archive",
        Head,
        "/containers/{id}/archive",
        "Get information about files in a container",
    )
    .params(&[
        CONTAINER_ID,
        Param::query("path", Str, "Resource in the container's filesystem to archive.").required(),
    ]),
    Endpoint::new("post_containers_prune", Post, "/containers/prune", "Delete stopped containers")
        .params(&[FILTERS]),
];
