//! In-memory scrape client for tests
//!
//! Serves canned responses keyed by URL so cache behavior can be tested
//! without network access, following the same pattern as the filesystem
//! stores' test doubles.

use super::firecrawl::{ScrapeClient, ScrapeResponse};
use crate::error::{NotecrawlError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scrape client returning pre-configured responses per URL
#[derive(Default)]
pub struct MockScrapeClient {
    responses: HashMap<String, ScrapeResponse>,
    failures: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MockScrapeClient {
    /// Create an empty mock client
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned response for a URL
    pub fn with_response(mut self, url: &str, response: ScrapeResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Queue a hard failure for a URL
    pub fn with_failure(mut self, url: &str, message: &str) -> Self {
        self.failures.insert(url.to_string(), message.to_string());
        self
    }

    /// Number of scrape calls made against this client
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScrapeClient for MockScrapeClient {
    async fn scrape(&self, url: &str, _formats: &[String]) -> Result<ScrapeResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.failures.get(url) {
            return Err(NotecrawlError::Other(message.clone()));
        }

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| NotecrawlError::Other(format!("no canned response for {url}")))
    }
}
