//! Docker Engine MCP Server Library
//!
//! Exposes the Docker Engine REST API as Model Context Protocol tools. Every
//! endpoint is a static descriptor; one generic adapter turns a tool call into
//! a single HTTP request against the configured daemon.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: endpoint catalog, request adapter, router and registry
//!   - **resources**: server info, endpoint index and type schemas
//! - **models**: serde types mirroring the Docker Engine schema
//!
//! # Example
//!
//! ```rust,no_run
//! use docker_engine_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod models;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
