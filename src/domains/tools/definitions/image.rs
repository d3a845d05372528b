//! Image endpoints.

use super::{FILTERS, REGISTRY_AUTH};
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};
use crate::models::{ContainerConfig, IdResponse, ImageSummary, coerce_as, decode_as};

use HttpMethod::{Delete, Get, Post};
use ParamKind::{Array, Boolean, Number, Object, String as Str};

const IMAGE_NAME: Param = Param::path("name", "Image name or ID.");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_images_json", Get, "/images/json", "List Images")
        .params(&[
            Param::query(
                "all",
                Boolean,
                "Show all images. Only images from a final layer (no children) are shown by default.",
            ),
            FILTERS,
            Param::query(
                "shared-size",
                Boolean,
                "Compute and show shared size as a `SharedSize` field on each image.",
            ),
            Param::query(
                "digests",
                Boolean,
                "Show digest information as a `RepoDigests` field on each image.",
            ),
        ])
        .responds(ResponseShape::Typed(decode_as::<Vec<ImageSummary>>)),
    Endpoint::new(
        "post_images_create",
        Post,
        "/images/create",
        "Create an image by pulling it from a registry or importing it",
    )
    .params(&[
        Param::query("fromImage", Str, "Name of the image to pull. May include a tag or digest."),
        Param::query(
            "fromSrc",
            Str,
            "Source to import. The value may be a URL from which the image can be retrieved or `-` to read the image from the request body.",
        ),
        Param::query("repo", Str, "Repository name given to an image when it is imported."),
        Param::query(
            "tag",
            Str,
            "Tag or digest. If empty when pulling an image, all tags for the given image are pulled.",
        ),
        Param::query("message", Str, "Set commit message for imported image."),
        Param::query("platform", Str, "Platform in the format `os[/arch[/variant]]`."),
        REGISTRY_AUTH,
        Param::body(
            "inputImage",
            Str,
            "Image content if the value `-` has been specified in fromSrc query parameter.",
        ),
    ])
    .body(RequestBody::Field("inputImage")),
    Endpoint::new("get_images_name_json", Get, "/images/{name}/json", "Inspect an image")
        .params(&[IMAGE_NAME]),
    Endpoint::new(
        "get_images_name_history",
        Get,
        "/images/{name}/history",
        "Get the history of an image",
    )
    .params(&[IMAGE_NAME])
    .responds(ResponseShape::List),
    Endpoint::new("post_images_name_push", Post, "/images/{name}/push", "Push an image")
        .params(&[
            Param::path("name", "Image name or ID, without the tag."),
            Param::query("tag", Str, "The tag to associate with the image on the registry."),
            REGISTRY_AUTH,
        ])
        .responds(ResponseShape::Text),
    Endpoint::new("post_images_name_tag", Post, "/images/{name}/tag", "Tag an image")
        .params(&[
            IMAGE_NAME,
            Param::query("repo", Str, "The repository to tag in, e.g. `someuser/someimage`."),
            Param::query("tag", Str, "The name of the new tag."),
        ]),
    Endpoint::new("delete_images_name", Delete, "/images/{name}", "Remove an image")
        .params(&[
            IMAGE_NAME,
            Param::query(
                "force",
                Boolean,
                "Remove the image even if it is being used by stopped containers or has other tags.",
            ),
            Param::query("noprune", Boolean, "Do not delete untagged parent images."),
        ])
        .responds(ResponseShape::List),
    Endpoint::new("get_images_search", Get, "/images/search", "Search images on Docker Hub")
        .params(&[
            Param::query("term", Str, "Term to search.").required(),
            Param::query("limit", Number, "Maximum number of results to return."),
            FILTERS,
        ])
        .responds(ResponseShape::List),
    Endpoint::new("post_images_prune", Post, "/images/prune", "Delete unused images")
        .params(&[FILTERS]),
    Endpoint::new("post_commit", Post, "/commit", "Create a new image from a container")
        .params(&[
            Param::query("container", Str, "The ID or name of the container to commit."),
            Param::query("repo", Str, "Repository name for the created image."),
            Param::query("tag", Str, "Tag name for the created image."),
            Param::query("comment", Str, "Commit message."),
            Param::query(
                "author",
                Str,
                "Author of the image, e.g. `John Hannibal Smith <hannibal@a-team.com>`.",
            ),
            Param::query("pause", Boolean, "Whether to pause the container before committing."),
            Param::query("changes", Str, "`Dockerfile` instructions to apply while committing."),
            Param::body("Image", Str, "The name of the image the container was created from."),
            Param::body("Cmd", Array, "Default command for the new image."),
            Param::body("Entrypoint", Array, "Default entry point for the new image."),
            Param::body("Env", Array, "Environment variables in the form `[\"VAR=value\", ...]`."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
            Param::body("ExposedPorts", Object, "An object mapping ports to an empty object."),
            Param::body("User", Str, "The user that commands are run as."),
            Param::body("WorkingDir", Str, "The working directory for commands to run in."),
        ])
        .body(RequestBody::Typed(coerce_as::<ContainerConfig>))
        .responds(ResponseShape::Typed(decode_as::<IdResponse>)),
    Endpoint::new("post_build_prune", Post, "/build/prune", "Delete builder cache")
        .params(&[
            Param::query(
                "keep-storage",
                Number,
                "Amount of disk space in bytes to keep for cache.",
            ),
            Param::query("all", Boolean, "Remove all types of build cache."),
            FILTERS,
        ]),
];
