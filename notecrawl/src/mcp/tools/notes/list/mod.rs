//! Note listing tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListNotesRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing all stored note names
#[derive(Default)]
pub struct ListNotesTool;

impl ListNotesTool {
    /// Creates a new instance of the ListNotesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListNotesTool {
    fn name(&self) -> &'static str {
        "list_notes"
    }

    fn description(&self) -> &'static str {
        "List the names of all stored notes"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListNotesRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_list_notes(request).await
    }
}
