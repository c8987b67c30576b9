//! Scraped record lookup tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ExtractScrapedInfoRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for looking up a cached scrape record with its content inlined
#[derive(Default)]
pub struct ExtractScrapedInfoTool;

impl ExtractScrapedInfoTool {
    /// Creates a new instance of the ExtractScrapedInfoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ExtractScrapedInfoTool {
    fn name(&self) -> &'static str {
        "extract_scraped_info"
    }

    fn description(&self) -> &'static str {
        "Look up a scraped website by provider name, URL, or domain and return its metadata and stored content as JSON"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "identifier": {
                    "type": "string",
                    "description": "Provider name, full URL, or domain to look for (case-insensitive)"
                }
            },
            "required": ["identifier"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ExtractScrapedInfoRequest = BaseToolImpl::parse_arguments(arguments)?;
        context
            .tool_handlers
            .handle_extract_scraped_info(request)
            .await
    }
}
