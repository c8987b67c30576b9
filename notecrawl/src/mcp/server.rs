//! MCP server implementation for serving notes and the scrape cache

use crate::error::Result;
use crate::notes::NoteStore;
use crate::scrape::ScrapeCache;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::tool_handlers::ToolHandlers;
use super::tool_registry::{McpTool, ToolContext, ToolRegistry};
use super::tools::notes::register_note_tools;
use super::tools::scrape::register_scrape_tools;

/// URI scheme under which notes are exposed as resources
const RESOURCE_SCHEME: &str = "resource://";

/// Name of the note summarization prompt
pub const SUMMARIZE_NOTE_PROMPT: &str = "summarize_note";

/// MCP server exposing the note store and scrape cache
#[derive(Clone)]
pub struct McpServer {
    note_store: Arc<RwLock<NoteStore>>,
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server rooted at the current working directory.
    ///
    /// The notes file and scrape directory are created lazily on first
    /// write, so construction never touches the filesystem.
    pub fn new() -> Result<Self> {
        let work_dir = std::env::current_dir()?;
        Ok(Self::new_with_work_dir(work_dir))
    }

    /// Create a new MCP server with stores rooted at the given directory
    pub fn new_with_work_dir(work_dir: PathBuf) -> Self {
        let note_store = Arc::new(RwLock::new(NoteStore::new_in_dir(&work_dir)));
        let scrape_cache = Arc::new(RwLock::new(ScrapeCache::new_in_dir(&work_dir)));

        let tool_handlers = Arc::new(ToolHandlers::new(note_store.clone(), scrape_cache));
        let tool_context = Arc::new(ToolContext::new(tool_handlers));

        let mut tool_registry = ToolRegistry::new();
        register_note_tools(&mut tool_registry);
        register_scrape_tools(&mut tool_registry);

        Self {
            note_store,
            tool_registry: Arc::new(tool_registry),
            tool_context,
        }
    }

    /// Get a reference to the tool registry
    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Names of all stored notes, for resource listing
    pub async fn note_names(&self) -> Result<Vec<String>> {
        let store = self.note_store.read().await;
        store.list().await
    }

    /// Text served for a note resource: the note's content, or the
    /// not-found message as the resource body
    pub async fn note_resource_text(&self, name: &str) -> Result<String> {
        let store = self.note_store.read().await;
        Ok(match store.get(name).await? {
            Some(content) => content,
            None => format!("Note '{name}' does not exist."),
        })
    }

    /// Instruction text for the summarize_note prompt
    pub async fn summarize_note_prompt_text(&self, name: &str) -> Result<String> {
        let store = self.note_store.read().await;
        Ok(match store.get(name).await? {
            Some(content) => {
                format!("Here is the note summarize it in 10 words or less:\n\n{content}")
            }
            None => format!("Note '{name}' not found."),
        })
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: Some(PromptsCapability { list_changed: None }),
            tools: Some(ToolsCapability { list_changed: None }),
            resources: Some(ResourcesCapability {
                subscribe: None,
                list_changed: None,
            }),
            logging: None,
            completions: None,
            experimental: None,
        }
    }

    fn instructions() -> String {
        "A note-taking and website scraping server. Use add_note, get_note, delete_note, and \
         list_notes to manage named notes. Use scrape_websites to fetch and cache website \
         content via Firecrawl, and extract_scraped_info to look up cached pages by provider \
         name, URL, or domain."
            .to_string()
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(Self::instructions()),
            server_info: Implementation {
                name: "notecrawl".into(),
                version: crate::VERSION.into(),
            },
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if let Some(tool) = self.tool_registry.get_tool(&request.name) {
            tool.execute(request.arguments.unwrap_or_default(), &self.tool_context)
                .await
        } else {
            Err(McpError::invalid_request(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: vec![Prompt {
                name: SUMMARIZE_NOTE_PROMPT.to_string(),
                description: Some(
                    "Instruction to summarize a stored note in 10 words or less".to_string(),
                ),
                arguments: Some(vec![PromptArgument {
                    name: "name".to_string(),
                    description: Some("Name of the note to summarize".to_string()),
                    required: Some(true),
                }]),
            }],
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        if request.name != SUMMARIZE_NOTE_PROMPT {
            return Err(McpError::invalid_request(
                format!("Unknown prompt: {}", request.name),
                None,
            ));
        }

        let name = request
            .arguments
            .as_ref()
            .and_then(|args| args.get("name"))
            .and_then(|value| value.as_str())
            .ok_or_else(|| {
                McpError::invalid_params("Missing required argument: name".to_string(), None)
            })?;

        let text = self
            .summarize_note_prompt_text(name)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(GetPromptResult {
            description: Some(
                "Instruction to summarize a stored note in 10 words or less".to_string(),
            ),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::Text { text },
            }],
        })
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        let names = self
            .note_names()
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let resources = names
            .into_iter()
            .map(|name| {
                Annotated::new(
                    RawResource {
                        uri: format!("{RESOURCE_SCHEME}{name}"),
                        name,
                        description: None,
                        mime_type: Some("text/plain".to_string()),
                        size: None,
                    },
                    None,
                )
            })
            .collect();

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        let name = request.uri.strip_prefix(RESOURCE_SCHEME).ok_or_else(|| {
            McpError::invalid_request(format!("Unsupported resource URI: {}", request.uri), None)
        })?;

        let text = self
            .note_resource_text(name)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: request.uri.clone(),
                mime_type: Some("text/plain".to_string()),
                text,
            }],
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "notecrawl".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(Self::instructions()),
        }
    }
}
