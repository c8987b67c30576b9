//! Request types for MCP tool operations
//!
//! These mirror the JSON argument objects the tools accept; parsing happens
//! through [`crate::mcp::tool_registry::BaseToolImpl::parse_arguments`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request type for creating or overwriting a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddNoteRequest {
    /// Name identifying the note
    pub name: String,
    /// Text content of the note
    pub content: String,
}

/// Request type for deleting a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteNoteRequest {
    /// Name of the note to delete
    pub name: String,
}

/// Request type for retrieving a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetNoteRequest {
    /// Name of the note to retrieve
    pub name: String,
}

/// Request type for listing all notes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListNotesRequest {}

/// Request type for scraping a batch of websites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeWebsitesRequest {
    /// Mapping of provider name to URL
    pub websites: BTreeMap<String, String>,
    /// Formats to request from the provider
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// Explicit API key, overriding the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_formats() -> Vec<String> {
    vec!["markdown".to_string(), "html".to_string()]
}

/// Request type for looking up a scraped record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractScrapedInfoRequest {
    /// Provider name, full URL, or domain to look for
    pub identifier: String,
}
