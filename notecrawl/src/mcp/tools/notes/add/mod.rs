//! Note creation tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddNoteRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for creating or overwriting notes
#[derive(Default)]
pub struct AddNoteTool;

impl AddNoteTool {
    /// Creates a new instance of the AddNoteTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddNoteTool {
    fn name(&self) -> &'static str {
        "add_note"
    }

    fn description(&self) -> &'static str {
        "Add a note with the given name and content, overwriting any existing note with that name"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name identifying the note"
                },
                "content": {
                    "type": "string",
                    "description": "Text content of the note"
                }
            },
            "required": ["name", "content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddNoteRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_add_note(request).await
    }
}
