//! Domains module containing business logic organized by bounded contexts.
//!
//! - `tools`: the Docker Engine API, one tool per endpoint
//! - `resources`: read-only descriptions of the server and its type catalog

pub mod resources;
pub mod tools;
