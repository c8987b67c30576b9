//! Note deletion tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DeleteNoteRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for deleting notes by name
#[derive(Default)]
pub struct DeleteNoteTool;

impl DeleteNoteTool {
    /// Creates a new instance of the DeleteNoteTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteNoteTool {
    fn name(&self) -> &'static str {
        "delete_note"
    }

    fn description(&self) -> &'static str {
        "Delete a note by name; reports when no note with that name exists"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the note to delete"
                }
            },
            "required": ["name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DeleteNoteRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_delete_note(request).await
    }
}
