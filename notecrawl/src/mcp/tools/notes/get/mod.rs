//! Note retrieval tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetNoteRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for retrieving a note's content by name
#[derive(Default)]
pub struct GetNoteTool;

impl GetNoteTool {
    /// Creates a new instance of the GetNoteTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetNoteTool {
    fn name(&self) -> &'static str {
        "get_note"
    }

    fn description(&self) -> &'static str {
        "Retrieve a note's content by name"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the note to retrieve"
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
        let request: GetNoteRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_get_note(request).await
    }
}
