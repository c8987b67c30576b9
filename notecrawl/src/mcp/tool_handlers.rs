//! Tool handlers for MCP operations
//!
//! Business logic bridging the MCP tool surface and the underlying stores.
//! Not-found outcomes are rendered as normal message strings, never as
//! protocol errors — callers asked a question and got an answer.

use super::shared_utils::McpErrorHandler;
use super::tool_registry::BaseToolImpl;
use super::types::*;
use crate::notes::{DeleteOutcome, NoteStore};
use crate::scrape::firecrawl::FirecrawlClient;
use crate::scrape::{ScrapeCache, ScrapeClient};
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Tool handlers for MCP server operations
#[derive(Clone)]
pub struct ToolHandlers {
    note_store: Arc<RwLock<NoteStore>>,
    scrape_cache: Arc<RwLock<ScrapeCache>>,
}

impl ToolHandlers {
    /// Create a new tool handlers instance over the given stores
    pub fn new(note_store: Arc<RwLock<NoteStore>>, scrape_cache: Arc<RwLock<ScrapeCache>>) -> Self {
        Self {
            note_store,
            scrape_cache,
        }
    }

    /// Handle the add_note tool operation
    pub async fn handle_add_note(
        &self,
        request: AddNoteRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Adding note '{}'", request.name);

        let store = self.note_store.write().await;
        match store.add(&request.name, &request.content).await {
            Ok(()) => Ok(BaseToolImpl::create_success_response(format!(
                "Note '{}' added!",
                request.name
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "add note")),
        }
    }

    /// Handle the delete_note tool operation.
    ///
    /// Deleting a missing note is a normal, reportable outcome.
    pub async fn handle_delete_note(
        &self,
        request: DeleteNoteRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Deleting note '{}'", request.name);

        let store = self.note_store.write().await;
        match store.delete(&request.name).await {
            Ok(DeleteOutcome::Deleted) => Ok(BaseToolImpl::create_success_response(format!(
                "Note '{}' deleted!",
                request.name
            ))),
            Ok(DeleteOutcome::Missing) => Ok(BaseToolImpl::create_success_response(format!(
                "Note '{}' does not exist.",
                request.name
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "delete note")),
        }
    }

    /// Handle the get_note tool operation
    pub async fn handle_get_note(
        &self,
        request: GetNoteRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Getting note '{}'", request.name);

        let store = self.note_store.read().await;
        match store.get(&request.name).await {
            Ok(Some(content)) => Ok(BaseToolImpl::create_success_response(content)),
            Ok(None) => Ok(BaseToolImpl::create_success_response(format!(
                "Note '{}' does not exist.",
                request.name
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get note")),
        }
    }

    /// Handle the list_notes tool operation.
    ///
    /// An empty store yields a sentinel message, not an empty string.
    pub async fn handle_list_notes(
        &self,
        _request: ListNotesRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Listing all notes");

        let store = self.note_store.read().await;
        match store.list().await {
            Ok(names) if names.is_empty() => Ok(BaseToolImpl::create_success_response(
                "No notes available.".to_string(),
            )),
            Ok(names) => Ok(BaseToolImpl::create_success_response(names.join("\n"))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "list notes")),
        }
    }

    /// Handle the scrape_websites tool operation.
    ///
    /// The API key precondition is checked before any cache or network
    /// activity; a missing key fails the whole call.
    pub async fn handle_scrape_websites(
        &self,
        request: ScrapeWebsitesRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        let api_key = FirecrawlClient::resolve_api_key(request.api_key.clone())
            .map_err(|e| McpErrorHandler::handle_error(e, "resolve scraping API key"))?;

        let client = FirecrawlClient::new(api_key);
        self.scrape_websites_with_client(&client, request).await
    }

    /// Scrape with an explicit client; the seam tests use to avoid the
    /// network.
    pub async fn scrape_websites_with_client(
        &self,
        client: &dyn ScrapeClient,
        request: ScrapeWebsitesRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Scraping {} website(s)", request.websites.len());

        let cache = self.scrape_cache.write().await;
        match cache
            .scrape_all(client, &request.websites, &request.formats)
            .await
        {
            Ok(successful) => {
                let body = serde_json::to_string(&successful)
                    .map_err(|e| McpErrorHandler::handle_error(e.into(), "serialize result"))?;
                Ok(BaseToolImpl::create_success_response(body))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "scrape websites")),
        }
    }

    /// Handle the extract_scraped_info tool operation
    pub async fn handle_extract_scraped_info(
        &self,
        request: ExtractScrapedInfoRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Extracting scraped info for '{}'", request.identifier);

        let cache = self.scrape_cache.read().await;
        match cache.extract(&request.identifier).await {
            Some(extracted) => {
                let body = serde_json::to_string_pretty(&extracted)
                    .map_err(|e| McpErrorHandler::handle_error(e.into(), "serialize record"))?;
                Ok(BaseToolImpl::create_success_response(body))
            }
            None => Ok(BaseToolImpl::create_success_response(format!(
                "There's no saved information related to identifier '{}'.",
                request.identifier
            ))),
        }
    }
}
