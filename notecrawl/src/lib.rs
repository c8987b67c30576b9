//! # NoteCrawl
//!
//! Persistent note storage and website scrape caching, exposed to AI
//! assistants over the Model Context Protocol (MCP).
//!
//! ## Features
//!
//! - **Note Store**: name-keyed notes persisted as one JSON object file
//! - **Scrape Cache**: Firecrawl-backed website scraping with on-disk
//!   content files and a metadata index queryable by provider, URL, or domain
//! - **MCP Support**: tools, a note resource, and a summarization prompt
//!   served through an `rmcp` server
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notecrawl::NoteStore;
//!
//! # async fn example() -> notecrawl::Result<()> {
//! let store = NoteStore::new_in_dir(".");
//!
//! store.add("greeting", "Hello from NoteCrawl").await?;
//! if let Some(content) = store.get("greeting").await? {
//!     println!("{}", content);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Shared utilities used across the library
pub mod common;

/// Unified error types
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Note storage backed by a single JSON file
pub mod notes;

/// Website scrape cache and scraping provider client
pub mod scrape;

pub use error::{NotecrawlError, Result};
pub use notes::{DeleteOutcome, NoteStore};
pub use scrape::cache::ScrapeCache;
pub use scrape::firecrawl::{FirecrawlClient, ScrapeClient};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
