//! Batch website scraping tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ScrapeWebsitesRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for scraping a batch of websites and caching their content
#[derive(Default)]
pub struct ScrapeWebsitesTool;

impl ScrapeWebsitesTool {
    /// Creates a new instance of the ScrapeWebsitesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ScrapeWebsitesTool {
    fn name(&self) -> &'static str {
        "scrape_websites"
    }

    fn description(&self) -> &'static str {
        "Scrape multiple websites via Firecrawl, store their content on disk, and return the provider names that succeeded"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "websites": {
                    "type": "object",
                    "description": "Mapping of provider name to URL",
                    "additionalProperties": { "type": "string" }
                },
                "formats": {
                    "type": "array",
                    "description": "Formats to scrape, e.g. [\"markdown\", \"html\"]",
                    "items": { "type": "string" },
                    "default": ["markdown", "html"]
                },
                "api_key": {
                    "type": "string",
                    "description": "Firecrawl API key; falls back to the FIRECRAWL_API_KEY environment variable"
                }
            },
            "required": ["websites"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ScrapeWebsitesRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_scrape_websites(request).await
    }
}
