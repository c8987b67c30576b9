//! Model Context Protocol (MCP) server support
//!
//! Exposes the note store and scrape cache as MCP tools, a read-only
//! `resource://{name}` note resource, and a `summarize_note` prompt, served
//! through `rmcp` over stdio. Tools are managed by a registry of trait
//! objects and dispatched through a shared context holding the handlers.

pub mod server;
pub mod shared_utils;
pub mod tool_handlers;
pub mod tool_registry;
pub mod tools;
pub mod types;

pub use server::McpServer;
pub use tools::notes::register_note_tools;
pub use tools::scrape::register_scrape_tools;
