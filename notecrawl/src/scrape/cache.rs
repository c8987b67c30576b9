//! Filesystem cache for scraped website content and metadata
//!
//! One metadata JSON object (provider name → [`ScrapeRecord`]) plus one
//! plain-text file per (provider, format) pair, all inside a single scrape
//! directory. The metadata file is rewritten wholesale after each batch;
//! records for providers outside the batch are preserved.

use super::firecrawl::ScrapeClient;
use super::{derive_domain, ExtractedRecord, ScrapeRecord};
use crate::error::Result;
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the metadata object inside the scrape directory
pub const METADATA_FILE: &str = "scraped_metadata.json";

/// Default scrape directory name used when the cache is configured by
/// parent directory
pub const DEFAULT_SCRAPE_DIR: &str = "scraped_content";

/// Filesystem-backed cache of scraped websites
pub struct ScrapeCache {
    scrape_dir: PathBuf,
}

impl ScrapeCache {
    /// Create a cache rooted at [`DEFAULT_SCRAPE_DIR`] under the given
    /// directory
    pub fn new_in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_SCRAPE_DIR))
    }

    /// Create a cache rooted at the given scrape directory
    pub fn new(scrape_dir: PathBuf) -> Self {
        Self { scrape_dir }
    }

    /// Directory holding the content files and the metadata file
    pub fn scrape_dir(&self) -> &Path {
        &self.scrape_dir
    }

    /// Path to the metadata file
    pub fn metadata_path(&self) -> PathBuf {
        self.scrape_dir.join(METADATA_FILE)
    }

    /// Load the metadata object, treating a missing or unparseable file as
    /// empty. Lookups degrade to not-found; the next batch write starts a
    /// fresh object.
    async fn load_metadata(&self) -> BTreeMap<String, ScrapeRecord> {
        match tokio::fs::read_to_string(self.metadata_path()).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Unreadable scrape metadata, treating as empty: {}", e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        }
    }

    async fn save_metadata(&self, metadata: &BTreeMap<String, ScrapeRecord>) -> Result<()> {
        tokio::fs::create_dir_all(&self.scrape_dir).await?;
        let content = serde_json::to_string_pretty(metadata)?;
        tokio::fs::write(self.metadata_path(), content).await?;
        Ok(())
    }

    /// Scrape every (provider, url) pair, merge the resulting records into
    /// the metadata file, and return the providers that produced content.
    ///
    /// Providers fail independently: a failed scrape is captured in that
    /// provider's record and the batch moves on.
    pub async fn scrape_all(
        &self,
        client: &dyn ScrapeClient,
        websites: &BTreeMap<String, String>,
        formats: &[String],
    ) -> Result<Vec<String>> {
        tokio::fs::create_dir_all(&self.scrape_dir).await?;

        let mut metadata = self.load_metadata().await;
        let mut successful = Vec::new();

        for (provider, url) in websites {
            let record = self.scrape_one(client, provider, url, formats).await;
            if record.success {
                successful.push(provider.clone());
            }
            metadata.insert(provider.clone(), record);
        }

        self.save_metadata(&metadata).await?;
        tracing::info!("Scraping complete, successful providers: {:?}", successful);
        Ok(successful)
    }

    /// Scrape one provider and build its record. Never fails: every error
    /// path lands in the record's `error` field with `success == false`.
    async fn scrape_one(
        &self,
        client: &dyn ScrapeClient,
        provider: &str,
        url: &str,
        formats: &[String],
    ) -> ScrapeRecord {
        let mut record = ScrapeRecord {
            provider_name: provider.to_string(),
            url: url.to_string(),
            domain: derive_domain(url),
            scraped_at: Utc::now(),
            formats: formats.to_vec(),
            success: false,
            error: None,
            title: None,
            description: None,
            content_files: BTreeMap::new(),
        };

        tracing::info!("Scraping {}: {}", provider, url);
        match client.scrape(url, formats).await {
            Ok(response) if response.success => {
                let document = response.data.unwrap_or_default();

                for format in formats {
                    let Some(body) = document.body(format) else {
                        continue;
                    };
                    if body.is_empty() {
                        continue;
                    }
                    let filename = format!("{provider}_{format}.txt");
                    if let Err(e) = tokio::fs::write(self.scrape_dir.join(&filename), body).await {
                        tracing::error!("Failed to write {} for {}: {}", filename, provider, e);
                        record.error = Some(e.to_string());
                        return record;
                    }
                    record.content_files.insert(format.clone(), filename);
                }

                if let Some(page) = document.metadata {
                    record.title = page.title;
                    record.description = page.description;
                }

                record.success = !record.content_files.is_empty();
                if !record.success {
                    record.error =
                        Some("no content returned for the requested formats".to_string());
                }
            }
            Ok(response) => {
                let message = response.error.unwrap_or_else(|| "Unknown error".to_string());
                tracing::error!("Failed to scrape {}: {}", provider, message);
                record.error = Some(message);
            }
            Err(e) => {
                tracing::error!("Error while scraping {}: {}", provider, e);
                record.error = Some(e.to_string());
            }
        }

        record
    }

    /// Look up a record by provider name, URL, or domain (case-insensitive)
    /// and join it with the current text of its content files. A missing
    /// content file contributes an empty string rather than an error.
    pub async fn extract(&self, identifier: &str) -> Option<ExtractedRecord> {
        let metadata = self.load_metadata().await;
        let needle = identifier.to_lowercase();

        for (provider, record) in metadata {
            let matches = [provider.as_str(), record.url.as_str(), record.domain.as_str()]
                .iter()
                .any(|candidate| candidate.to_lowercase() == needle);
            if !matches {
                continue;
            }

            let mut content = BTreeMap::new();
            for (format, filename) in &record.content_files {
                let text = tokio::fs::read_to_string(self.scrape_dir.join(filename))
                    .await
                    .unwrap_or_default();
                content.insert(format.clone(), text);
            }

            return Some(ExtractedRecord { record, content });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::firecrawl::ScrapeResponse;
    use crate::scrape::mock_client::MockScrapeClient;
    use tempfile::TempDir;

    fn create_test_cache() -> (ScrapeCache, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let cache = ScrapeCache::new_in_dir(temp_dir.path());
        (cache, temp_dir)
    }

    fn success_response(markdown: &str, html: &str) -> ScrapeResponse {
        serde_json::from_value(serde_json::json!({
            "success": true,
            "data": {
                "markdown": markdown,
                "html": html,
                "metadata": { "title": "Example Title", "description": "Example description" }
            }
        }))
        .unwrap()
    }

    fn default_formats() -> Vec<String> {
        vec!["markdown".to_string(), "html".to_string()]
    }

    fn websites(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(provider, url)| (provider.to_string(), url.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_scrape_writes_content_files_and_metadata() {
        let (cache, _temp_dir) = create_test_cache();
        let client = MockScrapeClient::new()
            .with_response("https://example.com", success_response("# Example", "<h1>Example</h1>"));

        let successful = cache
            .scrape_all(&client, &websites(&[("example", "https://example.com")]), &default_formats())
            .await
            .unwrap();

        assert_eq!(successful, vec!["example".to_string()]);

        let markdown_file = cache.scrape_dir().join("example_markdown.txt");
        let html_file = cache.scrape_dir().join("example_html.txt");
        assert_eq!(tokio::fs::read_to_string(markdown_file).await.unwrap(), "# Example");
        assert_eq!(tokio::fs::read_to_string(html_file).await.unwrap(), "<h1>Example</h1>");

        let extracted = cache.extract("example").await.unwrap();
        assert!(extracted.record.success);
        assert_eq!(extracted.record.domain, "example.com");
        assert_eq!(extracted.record.title.as_deref(), Some("Example Title"));
        assert_eq!(
            extracted.record.content_files.get("markdown").map(String::as_str),
            Some("example_markdown.txt")
        );
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_batch() {
        let (cache, _temp_dir) = create_test_cache();
        let client = MockScrapeClient::new()
            .with_response("https://good.example.com", success_response("body", "<p>body</p>"))
            .with_failure("https://bad.example.com", "connection reset by peer");

        let successful = cache
            .scrape_all(
                &client,
                &websites(&[
                    ("bad", "https://bad.example.com"),
                    ("good", "https://good.example.com"),
                ]),
                &default_formats(),
            )
            .await
            .unwrap();

        assert_eq!(successful, vec!["good".to_string()]);
        assert_eq!(client.call_count(), 2);

        // Both providers are recorded; the failing one carries its error.
        let bad = cache.extract("bad").await.unwrap();
        assert!(!bad.record.success);
        assert!(bad.record.error.as_deref().unwrap().contains("connection reset"));
        assert!(bad.content.is_empty());

        let good = cache.extract("good").await.unwrap();
        assert!(good.record.success);
    }

    #[tokio::test]
    async fn test_provider_reported_failure_is_recorded() {
        let (cache, _temp_dir) = create_test_cache();
        let response: ScrapeResponse = serde_json::from_value(serde_json::json!({
            "success": false,
            "error": "This website is not supported"
        }))
        .unwrap();
        let client = MockScrapeClient::new().with_response("https://blocked.example.com", response);

        let successful = cache
            .scrape_all(&client, &websites(&[("blocked", "https://blocked.example.com")]), &default_formats())
            .await
            .unwrap();

        assert!(successful.is_empty());
        let record = cache.extract("blocked").await.unwrap().record;
        assert_eq!(record.error.as_deref(), Some("This website is not supported"));
    }

    #[tokio::test]
    async fn test_provider_success_without_content_is_not_successful() {
        let (cache, _temp_dir) = create_test_cache();
        let response: ScrapeResponse = serde_json::from_value(serde_json::json!({
            "success": true,
            "data": { "markdown": "" }
        }))
        .unwrap();
        let client = MockScrapeClient::new().with_response("https://empty.example.com", response);

        let successful = cache
            .scrape_all(&client, &websites(&[("empty", "https://empty.example.com")]), &default_formats())
            .await
            .unwrap();

        assert!(successful.is_empty());
        let record = cache.extract("empty").await.unwrap().record;
        assert!(!record.success);
        assert!(record.error.is_some());
        assert!(record.content_files.is_empty());
    }

    #[tokio::test]
    async fn test_rescrape_preserves_unrelated_providers() {
        let (cache, _temp_dir) = create_test_cache();

        let first = MockScrapeClient::new()
            .with_response("https://one.example.com", success_response("one", "<p>one</p>"));
        cache
            .scrape_all(&first, &websites(&[("one", "https://one.example.com")]), &default_formats())
            .await
            .unwrap();

        let second = MockScrapeClient::new()
            .with_response("https://two.example.com", success_response("two", "<p>two</p>"));
        cache
            .scrape_all(&second, &websites(&[("two", "https://two.example.com")]), &default_formats())
            .await
            .unwrap();

        assert!(cache.extract("one").await.is_some());
        assert!(cache.extract("two").await.is_some());
    }

    #[tokio::test]
    async fn test_extract_matches_provider_url_and_domain() {
        let (cache, _temp_dir) = create_test_cache();
        let client = MockScrapeClient::new()
            .with_response("https://Docs.Example.com/page", success_response("docs", "<p>docs</p>"));

        cache
            .scrape_all(&client, &websites(&[("docs", "https://Docs.Example.com/page")]), &default_formats())
            .await
            .unwrap();

        let by_provider = cache.extract("DOCS").await.unwrap();
        let by_url = cache.extract("https://docs.example.com/page").await.unwrap();
        let by_domain = cache.extract("docs.example.com").await.unwrap();

        assert_eq!(by_provider, by_url);
        assert_eq!(by_provider, by_domain);
    }

    #[tokio::test]
    async fn test_extract_unknown_identifier() {
        let (cache, _temp_dir) = create_test_cache();
        assert!(cache.extract("nothing-here").await.is_none());
    }

    #[tokio::test]
    async fn test_extract_tolerates_deleted_content_file() {
        let (cache, _temp_dir) = create_test_cache();
        let client = MockScrapeClient::new()
            .with_response("https://example.com", success_response("# Example", "<h1>Example</h1>"));

        cache
            .scrape_all(&client, &websites(&[("example", "https://example.com")]), &default_formats())
            .await
            .unwrap();

        tokio::fs::remove_file(cache.scrape_dir().join("example_markdown.txt"))
            .await
            .unwrap();

        let extracted = cache.extract("example").await.unwrap();
        assert_eq!(extracted.content.get("markdown").map(String::as_str), Some(""));
        assert_eq!(
            extracted.content.get("html").map(String::as_str),
            Some("<h1>Example</h1>")
        );
    }

    #[tokio::test]
    async fn test_corrupt_metadata_degrades_to_not_found() {
        let (cache, _temp_dir) = create_test_cache();
        tokio::fs::create_dir_all(cache.scrape_dir()).await.unwrap();
        tokio::fs::write(cache.metadata_path(), "{ not json").await.unwrap();

        assert!(cache.extract("anything").await.is_none());
    }

    #[tokio::test]
    async fn test_metadata_file_is_one_json_object() {
        let (cache, _temp_dir) = create_test_cache();
        let client = MockScrapeClient::new()
            .with_response("https://example.com", success_response("body", "<p>body</p>"));

        cache
            .scrape_all(&client, &websites(&[("example", "https://example.com")]), &default_formats())
            .await
            .unwrap();

        let raw = tokio::fs::read_to_string(cache.metadata_path()).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.as_object().unwrap().contains_key("example"));
    }
}
