//! Firecrawl scraping API client
//!
//! A thin `reqwest` wrapper over the provider's scrape endpoint, behind the
//! [`ScrapeClient`] trait so the cache logic can be exercised without
//! network access.

use crate::common::env_loader;
use crate::error::{NotecrawlError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

/// Environment variable consulted when no API key argument is supplied
pub const API_KEY_ENV_VAR: &str = "FIRECRAWL_API_KEY";

/// Environment variable overriding the provider endpoint
pub const API_URL_ENV_VAR: &str = "FIRECRAWL_API_URL";

/// Default provider endpoint
pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";

/// Client interface for a website scraping provider
#[async_trait]
pub trait ScrapeClient: Send + Sync {
    /// Scrape a single URL, requesting the given content formats
    async fn scrape(&self, url: &str, formats: &[String]) -> Result<ScrapeResponse>;
}

/// Top-level response from a scrape call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeResponse {
    /// Whether the provider reports the scrape as successful
    #[serde(default)]
    pub success: bool,
    /// Provider-reported error message on failure
    #[serde(default)]
    pub error: Option<String>,
    /// Scraped document, present on success
    #[serde(default)]
    pub data: Option<ScrapeDocument>,
}

/// Scraped document: one entry per requested format plus page metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeDocument {
    /// Page metadata reported by the provider
    #[serde(default)]
    pub metadata: Option<PageMetadata>,
    /// Remaining keys map a format name to its body
    #[serde(flatten)]
    pub formats: HashMap<String, serde_json::Value>,
}

impl ScrapeDocument {
    /// Body for a format, when present and textual
    pub fn body(&self, format: &str) -> Option<&str> {
        self.formats.get(format).and_then(|value| value.as_str())
    }
}

/// Page metadata included in a scrape response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageMetadata {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
    /// Page description
    #[serde(default)]
    pub description: Option<String>,
}

/// HTTP client for the Firecrawl scraping API
pub struct FirecrawlClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FirecrawlClient {
    /// Create a client with the given API key.
    ///
    /// The endpoint defaults to [`DEFAULT_API_URL`] and can be overridden
    /// through [`API_URL_ENV_VAR`].
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: env_loader::load_env_string(API_URL_ENV_VAR, DEFAULT_API_URL),
        }
    }

    /// Resolve the API key from an explicit argument or the environment.
    ///
    /// Blank values count as absent in both sources. Fails with
    /// [`NotecrawlError::MissingApiKey`] when neither source yields a key —
    /// callers check this before doing any other work.
    pub fn resolve_api_key(explicit: Option<String>) -> Result<String> {
        explicit
            .filter(|key| !key.trim().is_empty())
            .or_else(|| env_loader::load_env_nonempty(API_KEY_ENV_VAR))
            .ok_or(NotecrawlError::MissingApiKey)
    }
}

#[async_trait]
impl ScrapeClient for FirecrawlClient {
    async fn scrape(&self, url: &str, formats: &[String]) -> Result<ScrapeResponse> {
        let endpoint = format!("{}/v1/scrape", self.base_url);
        tracing::debug!("Requesting scrape of {} via {}", url, endpoint);

        let response = self
            .http
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({ "url": url, "formats": formats }))
            .send()
            .await?
            .error_for_status()?
            .json::<ScrapeResponse>()
            .await?;

        Ok(response)
    }
}
