//! Note management tools for MCP operations
//!
//! CRUD over the JSON-file-backed note store:
//! - **add**: create or overwrite a note by name
//! - **get**: retrieve a note's content
//! - **delete**: remove a note (removing a missing note is reported, not
//!   raised)
//! - **list**: all note names, newline-joined
//!
//! All note tools follow the same pattern: request types in
//! `crate::mcp::types`, business logic in `crate::mcp::tool_handlers`.

pub mod add;
pub mod delete;
pub mod get;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all note tools with the registry
pub fn register_note_tools(registry: &mut ToolRegistry) {
    registry.register(add::AddNoteTool::new());
    registry.register(delete::DeleteNoteTool::new());
    registry.register(get::GetNoteTool::new());
    registry.register(list::ListNotesTool::new());
}
