//! Swarm endpoints.

use super::VERSION;
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};

use HttpMethod::{Get, Post};
use ParamKind::{Array, Boolean, Number, Object, String as Str};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_swarm", Get, "/swarm", "Inspect swarm"),
    Endpoint::new("post_swarm_init", Post, "/swarm/init", "Initialize a new swarm")
        .params(&[
            Param::body(
                "ListenAddr",
                Str,
                "Listen address used for inter-manager communication, e.g. `0.0.0.0:2377`.",
            ),
            Param::body(
                "AdvertiseAddr",
                Str,
                "Externally reachable address advertised to other nodes.",
            ),
            Param::body("DataPathAddr", Str, "Address or interface to use for data path traffic."),
            Param::body(
                "DataPathPort",
                Number,
                "DataPathPort specifies the data path port number for data traffic.",
            ),
            Param::body(
                "DefaultAddrPool",
                Array,
                "Default subnet pools for global scope networks.",
            ),
            Param::body("ForceNewCluster", Boolean, "Force creation of a new swarm."),
            Param::body(
                "SubnetSize",
                Number,
                "SubnetSize specifies the subnet size of the networks created from the default subnet pool.",
            ),
            Param::body("Spec", Object, "User modifiable swarm configuration."),
        ])
        .body(RequestBody::Arguments)
        .responds(ResponseShape::Text),
    Endpoint::new("post_swarm_join", Post, "/swarm/join", "Join an existing swarm")
        .params(&[
            Param::body(
                "ListenAddr",
                Str,
                "Listen address used for inter-manager communication if the node gets promoted to manager.",
            ),
            Param::body(
                "AdvertiseAddr",
                Str,
                "Externally reachable address advertised to other nodes.",
            ),
            Param::body("DataPathAddr", Str, "Address or interface to use for data path traffic."),
            Param::body(
                "RemoteAddrs",
                Array,
                "Addresses of manager nodes already participating in the swarm.",
            ),
            Param::body("JoinToken", Str, "Secret token for joining this swarm."),
        ])
        .body(RequestBody::Arguments),
    Endpoint::new("post_swarm_leave", Post, "/swarm/leave", "Leave a swarm")
        .params(&[Param::query(
            "force",
            Boolean,
            "Force leave swarm, even if this is the last manager or that it will break the cluster.",
        )]),
    Endpoint::new("post_swarm_update", Post, "/swarm/update", "Update a swarm")
        .params(&[
            VERSION,
            Param::query("rotateWorkerToken", Boolean, "Rotate the worker join token."),
            Param::query("rotateManagerToken", Boolean, "Rotate the manager join token."),
            Param::query("rotateManagerUnlockKey", Boolean, "Rotate the manager unlock key."),
            Param::body("Name", Str, "Name of the swarm."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
            Param::body("Orchestration", Object, "Orchestration configuration."),
            Param::body("Raft", Object, "Raft configuration."),
            Param::body("Dispatcher", Object, "Dispatcher configuration."),
            Param::body("CAConfig", Object, "CA configuration."),
            Param::body("EncryptionConfig", Object, "Parameters related to encryption-at-rest."),
            Param::body("TaskDefaults", Object, "Defaults for creating tasks in this cluster."),
        ])
        .body(RequestBody::Arguments),
    Endpoint::new("get_swarm_unlockkey", Get, "/swarm/unlockkey", "Get the unlock key"),
    Endpoint::new("post_swarm_unlock", Post, "/swarm/unlock", "Unlock a locked manager")
        .params(&[Param::body("UnlockKey", Str, "The swarm's unlock key.")])
        .body(RequestBody::Arguments),
];
