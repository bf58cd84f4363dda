//! Short object descriptions from the Wikipedia action API.
//!
//! DESIGN
//! ======
//! `describe` walks the candidate titles produced by
//! `sky::naming::lookup_terms` and returns the first non-empty intro
//! extract. Upstream failures for one title are logged and the walk moves
//! on, so a flaky title never hides a later match.

use serde::Deserialize;
use std::collections::HashMap;

use super::lookup::{LookupError, get_text};

/// Sentences requested for each extract.
pub const EXTRACT_SENTENCES: &str = "3";

/// Single-title intro extract lookup.
#[async_trait::async_trait]
pub trait Encyclopedia: Send + Sync {
    /// Plain-text intro for an exact article title, `None` when missing.
    async fn extract(&self, title: &str) -> Result<Option<String>, LookupError>;
}

/// First non-empty extract across the lookup terms for `name`.
pub async fn describe(encyclopedia: &dyn Encyclopedia, name: &str) -> Option<String> {
    for term in sky::naming::lookup_terms(name) {
        match encyclopedia.extract(&term).await {
            Ok(Some(text)) => return Some(text),
            Ok(None) => {}
            Err(e) => tracing::warn!(%term, error = %e, "encyclopedia lookup failed"),
        }
    }
    None
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct WikipediaClient {
    http: reqwest::Client,
    api_url: String,
}

impl WikipediaClient {
    #[must_use]
    pub fn new(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self { http, api_url: api_url.into() }
    }
}

#[async_trait::async_trait]
impl Encyclopedia for WikipediaClient {
    async fn extract(&self, title: &str) -> Result<Option<String>, LookupError> {
        let text = get_text(&self.http, &self.api_url, &extract_query(title)).await?;
        parse_extract(&text)
    }
}

/// Query parameters for an intro-only, plain-text extract of `title`.
pub(crate) fn extract_query(title: &str) -> [(&'static str, &str); 9] {
    [
        ("action", "query"),
        ("format", "json"),
        ("prop", "extracts"),
        ("exintro", "1"),
        ("explaintext", "1"),
        ("exsentences", EXTRACT_SENTENCES),
        ("redirects", "1"),
        ("origin", "*"),
        ("titles", title),
    ]
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Deserialize)]
struct Page {
    #[serde(default)]
    missing: Option<serde_json::Value>,
    #[serde(default)]
    extract: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract text from a `query` response. Missing pages (id `-1`) and empty
/// extracts yield `None`.
pub(crate) fn parse_extract(json: &str) -> Result<Option<String>, LookupError> {
    let response: QueryResponse = serde_json::from_str(json).map_err(|e| LookupError::Parse(e.to_string()))?;
    let Some(body) = response.query else {
        return Ok(None);
    };

    Ok(body
        .pages
        .into_iter()
        .filter(|(id, page)| id != "-1" && page.missing.is_none())
        .find_map(|(_, page)| page.extract.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())))
}

#[cfg(test)]
#[path = "encyclopedia_test.rs"]
mod tests;
