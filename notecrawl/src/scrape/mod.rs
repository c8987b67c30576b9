//! Website scrape caching
//!
//! This module records, per named provider, the outcome of scraping one
//! website: a metadata record in a single JSON object file plus one
//! plain-text content file per requested format. Records are queryable by
//! provider name, URL, or domain.
//!
//! ## Data Model
//!
//! Each [`ScrapeRecord`] contains:
//! - **Provider name**: caller-assigned short name, the record's key
//! - **URL and domain**: the scrape target and its derived host
//! - **Timestamp**: when the scrape was attempted (UTC)
//! - **Success flag and error**: per-provider failures are recorded, never
//!   raised
//! - **Content files**: format name to `{provider}_{format}.txt` filename
//!
//! ## Components
//!
//! - [`cache::ScrapeCache`]: the filesystem store and batch scrape loop
//! - [`firecrawl::FirecrawlClient`]: HTTP client for the scraping provider
//! - [`mock_client::MockScrapeClient`]: canned-response client for tests

pub mod cache;
pub mod firecrawl;
pub mod mock_client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use cache::ScrapeCache;
pub use firecrawl::{FirecrawlClient, ScrapeClient};

/// Metadata describing one provider's most recent scrape attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRecord {
    /// Caller-assigned short name for the scraped website
    pub provider_name: String,
    /// Source URL the scrape was requested for
    pub url: String,
    /// Domain derived from the URL, empty when the URL has no host
    pub domain: String,
    /// When the scrape was attempted
    pub scraped_at: DateTime<Utc>,
    /// Formats requested from the provider
    pub formats: Vec<String>,
    /// True iff the provider call succeeded and at least one content file
    /// was written
    pub success: bool,
    /// Error captured on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Page title reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page description reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Mapping from format name to the content file holding its body
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub content_files: BTreeMap<String, String>,
}

/// A stored record joined with the current text of its content files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRecord {
    /// The stored metadata record
    #[serde(flatten)]
    pub record: ScrapeRecord,
    /// Format name to file content, empty string when the file is missing
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, String>,
}

/// Derive the domain component of a URL.
///
/// Invalid or host-less URLs yield an empty string rather than an error;
/// the domain is informational and never gates the scrape itself.
pub fn derive_domain(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_domain() {
        assert_eq!(derive_domain("https://example.com/docs"), "example.com");
        assert_eq!(derive_domain("https://api.example.com"), "api.example.com");
        assert_eq!(derive_domain("not a url"), "");
        assert_eq!(derive_domain("file:///tmp/page.html"), "");
    }

    #[test]
    fn test_record_serialization_omits_empty_optionals() {
        let record = ScrapeRecord {
            provider_name: "example".to_string(),
            url: "https://example.com".to_string(),
            domain: "example.com".to_string(),
            scraped_at: Utc::now(),
            formats: vec!["markdown".to_string()],
            success: false,
            error: Some("boom".to_string()),
            title: None,
            description: None,
            content_files: BTreeMap::new(),
        };

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["error"], "boom");
        assert!(!object.contains_key("title"));
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("content_files"));
    }

    #[test]
    fn test_record_round_trip() {
        let mut content_files = BTreeMap::new();
        content_files.insert("markdown".to_string(), "example_markdown.txt".to_string());

        let record = ScrapeRecord {
            provider_name: "example".to_string(),
            url: "https://example.com".to_string(),
            domain: "example.com".to_string(),
            scraped_at: Utc::now(),
            formats: vec!["markdown".to_string()],
            success: true,
            error: None,
            title: Some("Example".to_string()),
            description: Some("An example page".to_string()),
            content_files,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ScrapeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_extracted_record_flattens_metadata() {
        let mut content = BTreeMap::new();
        content.insert("markdown".to_string(), "# Heading".to_string());

        let extracted = ExtractedRecord {
            record: ScrapeRecord {
                provider_name: "example".to_string(),
                url: "https://example.com".to_string(),
                domain: "example.com".to_string(),
                scraped_at: Utc::now(),
                formats: vec!["markdown".to_string()],
                success: true,
                error: None,
                title: None,
                description: None,
                content_files: BTreeMap::new(),
            },
            content,
        };

        let json = serde_json::to_value(&extracted).unwrap();
        let object = json.as_object().unwrap();
        // Flattened: record fields and content live at the same level.
        assert_eq!(object["provider_name"], "example");
        assert_eq!(object["content"]["markdown"], "# Heading");
    }
}
