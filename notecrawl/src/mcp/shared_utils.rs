//! Shared utilities for MCP operations
//!
//! Consistent mapping from library errors to MCP error responses, used by
//! every tool handler.

use crate::error::NotecrawlError;
use rmcp::Error as McpError;

/// Common error handling for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a [`NotecrawlError`] to the appropriate MCP error response.
    ///
    /// Precondition failures the caller can fix map to `invalid_params`;
    /// everything else is an internal error.
    pub fn handle_error(error: NotecrawlError, operation: &str) -> McpError {
        tracing::error!("MCP operation '{}' failed: {}", operation, error);

        match error {
            NotecrawlError::MissingApiKey => McpError::invalid_params(error.to_string(), None),
            NotecrawlError::Io(err) => McpError::internal_error(format!("IO error: {err}"), None),
            NotecrawlError::Json(err) => {
                McpError::internal_error(format!("JSON error: {err}"), None)
            }
            NotecrawlError::Http(err) => {
                McpError::internal_error(format!("HTTP error: {err}"), None)
            }
            other => McpError::internal_error(other.to_string(), None),
        }
    }
}
