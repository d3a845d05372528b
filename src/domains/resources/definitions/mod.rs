//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and a
//! renderer. Contents are computed on every read.

mod endpoint_catalog;
pub mod schemas;
mod server_info;

pub use endpoint_catalog::EndpointCatalogResource;
pub use server_info::ServerInfoResource;

use super::service::ResourceContent;

/// Trait for resource definitions with a fixed URI.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    const MIME_TYPE: &'static str;

    /// How the content of this resource is produced.
    fn content() -> ResourceContent;
}
