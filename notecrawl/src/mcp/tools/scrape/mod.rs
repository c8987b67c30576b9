//! Website scraping tools for MCP operations
//!
//! - **scrape_websites**: batch-scrape a provider→URL mapping through the
//!   Firecrawl API, persisting content files and metadata records
//! - **extract_scraped_info**: look up a stored record by provider name,
//!   URL, or domain, with content files inlined
//!
//! Per-provider failures are captured in their records; only the missing
//! API key precondition fails a whole call.

pub mod extract_scraped_info;
pub mod scrape_websites;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all scraping tools with the registry
pub fn register_scrape_tools(registry: &mut ToolRegistry) {
    registry.register(scrape_websites::ScrapeWebsitesTool::new());
    registry.register(extract_scraped_info::ExtractScrapedInfoTool::new());
}
