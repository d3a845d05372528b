//! Distribution endpoints.

use super::REGISTRY_AUTH;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

pub const ENDPOINTS: &[Endpoint] = &[Endpoint::new(
    "get_distribution_name_json",
    HttpMethod::Get,
    "/distribution/{name}/json",
    "Get image information from the registry",
)
.params(&[
    Param::path("name", "Image name or id."),
    REGISTRY_AUTH,
])];
