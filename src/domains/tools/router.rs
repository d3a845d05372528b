//! Tool Router - builds the rmcp ToolRouter from the endpoint catalog.
//!
//! Every endpoint gets one dynamic route that forwards its arguments to the
//! shared adapter.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::CallToolResult,
};

use super::definitions;
use super::endpoint::Endpoint;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    definitions::all_endpoints().fold(ToolRouter::new(), |router, endpoint| {
        router.with_route(create_route(endpoint, registry.clone()))
    })
}

fn create_route<S>(endpoint: &'static Endpoint, registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(endpoint.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let registry = registry.clone();
        async move {
            let result = registry.adapter().invoke(endpoint, args).await;
            Ok::<CallToolResult, McpError>(result)
        }
        .boxed()
    })
}
