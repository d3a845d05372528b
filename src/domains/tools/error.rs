//! Tool-specific error types.
//!
//! Each variant is one way a single tool invocation can fail. None of them is
//! retried; all are reported back to the client as an error-flagged tool
//! result carrying the `Display` text.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The arguments were not a JSON object, or otherwise unusable.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Missing required path parameter: {0}")]
    MissingPathParameter(String),

    /// A path parameter was present but not a string.
    #[error("Invalid path parameter: {0}")]
    InvalidPathParameter(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// The arguments could not be coerced into the endpoint's body type.
    #[error("Failed to convert arguments to request type: {0}")]
    BodyConversion(#[source] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    BodyEncoding(#[source] serde_json::Error),

    #[error("Failed to create request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    /// Connection refused, DNS failure, timeout, …
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    /// The daemon answered with status >= 400; `body` is the raw response text.
    #[error("API error: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to format JSON: {0}")]
    Format(#[source] serde_json::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into an error-flagged tool result.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(self.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_raw_body() {
        let err = ToolError::Api {
            status: 404,
            body: r#"{"message":"not found"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"API error: {"message":"not found"}"#);
    }

    #[test]
    fn test_path_parameter_messages() {
        assert_eq!(
            ToolError::MissingPathParameter("id".into()).to_string(),
            "Missing required path parameter: id"
        );
        assert_eq!(
            ToolError::InvalidPathParameter("id".into()).to_string(),
            "Invalid path parameter: id"
        );
    }

    #[test]
    fn test_invalid_arguments_message() {
        let result = ToolError::invalid_arguments("expected a JSON object").into_call_result();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            serde_json::to_value(&result.content).unwrap()[0]["text"],
            "Invalid arguments: expected a JSON object"
        );
    }

    #[test]
    fn test_into_call_result_is_error() {
        let result = ToolError::not_found("get_nothing").into_call_result();
        assert_eq!(result.is_error, Some(true));
    }
}
