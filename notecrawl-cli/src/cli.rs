use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notecrawl")]
#[command(version)]
#[command(about = "An MCP server for notes and cached website scrapes")]
#[command(long_about = "
notecrawl is an MCP (Model Context Protocol) server that stores named notes
in a JSON file and caches website content scraped through the Firecrawl API.

Example usage:
  notecrawl serve    # Run as MCP server over stdio

Set FIRECRAWL_API_KEY to scrape without passing an explicit key.
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs notecrawl as an MCP server over stdio. The server exposes:

- Note tools: add_note, get_note, delete_note, list_notes
- Scraping tools: scrape_websites, extract_scraped_info
- A resource://{name} lookup for each stored note
- A summarize_note prompt

Notes are stored in my_notes.json and scraped content under
scraped_content/ in the current working directory.

Example:
  notecrawl serve
  # Or configure in your MCP client's settings
")]
    Serve,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_command() {
        let cli = Cli::try_parse_from(["notecrawl", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["notecrawl"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_logging_flags() {
        let cli = Cli::try_parse_from(["notecrawl", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["notecrawl", "-q", "serve"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["notecrawl", "frobnicate"]).is_err());
    }
}
