//! Task endpoints.

use super::{FILTERS, LOG_PARAMS};
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param, ResponseShape};

use HttpMethod::Get;

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new("get_tasks", Get, "/tasks", "List tasks")
        .params(&[FILTERS])
        .responds(ResponseShape::List),
    Endpoint::new("get_tasks_id", Get, "/tasks/{id}", "Inspect a task")
        .params(&[Param::path("id", "ID of the task.")]),
    Endpoint::new("get_tasks_id_logs", Get, "/tasks/{id}/logs", "Get task logs")
        .params(LOG_PARAMS)
        .responds(ResponseShape::Text),
];
