//! Secret endpoints.

use super::{FILTERS, VERSION};
use crate::domains::tools::endpoint::{
    Endpoint, HttpMethod, Param, ParamKind, RequestBody, ResponseShape,
};
use crate::models::{IdResponse, Secret, SecretSpec, coerce_as, decode_as};

use HttpMethod::{Delete, Get, Post};
use ParamKind::{Object, String as Str};

const SECRET_ID: Param = Param::path("id", "ID of the secret.");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_secrets", Get, "/secrets", "List secrets")
        .params(&[FILTERS])
        .responds(ResponseShape::List),
    Endpoint::new("post_secrets_create", Post, "/secrets/create", "Create a secret")
        .params(&[
            Param::body("Name", Str, "User-defined name of the secret."),
            Param::body("Labels", Object, "User-defined key/value metadata."),
            Param::body("Data", Str, "Base64-url-safe-encoded secret data."),
            Param::body(
                "Driver",
                Object,
                "Name of the secrets driver used to fetch the secret's value from an external secret store.",
            ),
            Param::body("Templating", Object, "Templating driver, if applicable."),
        ])
        .body(RequestBody::Typed(coerce_as::<SecretSpec>))
        .responds(ResponseShape::Typed(decode_as::<IdResponse>)),
    Endpoint::new("get_secrets_id", Get, "/secrets/{id}", "Inspect a secret")
        .params(&[SECRET_ID])
        .responds(ResponseShape::Typed(decode_as::<Secret>)),
    Endpoint::new("delete_secrets_id", Delete, "/secrets/{id}", "Delete a secret")
        .params(&[SECRET_ID]),
    Endpoint::new("post_secrets_id_update", Post, "/secrets/{id}/update", "Update a Secret")
        .params(&[
            SECRET_ID,
            VERSION,
            Param::body("Name", Str, "User-defined name of the secret."),
            Param::body(
                "Labels",
                Object,
                "User-defined key/value metadata. Only this field can be updated.",
            ),
            Param::body("Data", Str, "Base64-url-safe-encoded secret data."),
        ])
        .body(RequestBody::Typed(coerce_as::<SecretSpec>)),
];
