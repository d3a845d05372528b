//! Tools domain module.
//!
//! Every Docker Engine endpoint is exposed as one MCP tool. Endpoints are
//! static descriptors; a single generic adapter executes all of them.
//!
//! ## Architecture
//!
//! - `endpoint.rs` - Descriptor types (params by location, body and response shapes)
//! - `definitions/` - The endpoint catalog, one module per resource group
//! - `adapter.rs` - Argument map → HTTP request → tool result
//! - `router.rs` - ToolRouter builder for the rmcp service (STDIO)
//! - `registry.rs` - Name lookup and dispatch (HTTP transport)
//! - `error.rs` - Tool invocation failures
//!
//! Adding an endpoint means adding one descriptor to the matching
//! `definitions/` table; the router and registry pick it up.

pub mod adapter;
pub mod definitions;
pub mod endpoint;
mod error;
mod registry;
pub mod router;

#[cfg(test)]
mod adapter_tests;

pub use adapter::DockerAdapter;
pub use endpoint::{Endpoint, HttpMethod, Param, ParamKind, ParamLocation};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
