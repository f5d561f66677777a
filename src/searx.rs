//! SearxNG search gateway.
//!
//! Issues a single query to a configured SearxNG instance over its JSON
//! API (`GET /search?q=…&format=json`) and adapts the backend-native field
//! names (`link`, `snippet`) into the canonical [`SearchResult`] shape
//! before anything downstream sees the data. One backend, one call: no
//! retry, no fallback instance, no local re-ranking.

use serde::Deserialize;
use url::Url;

use crate::config::SearxConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::types::SearchResult;

/// One hit as the backend returns it. Field names are backend-native;
/// [`SearxHit::into_result`] renames them into the canonical shape.
/// Missing `title`/`link`/`snippet` fail deserialization outright.
#[derive(Debug, Deserialize)]
struct SearxHit {
    title: String,
    link: String,
    snippet: String,
    #[serde(default)]
    raw_content: Option<String>,
}

impl SearxHit {
    /// Adapt a backend hit to the canonical record shape:
    /// `link` becomes `url`, `snippet` becomes `content`.
    fn into_result(self) -> SearchResult {
        SearchResult {
            title: self.title,
            url: self.link,
            content: self.snippet,
            raw_content: self.raw_content,
        }
    }
}

/// Top-level SearxNG JSON response envelope.
#[derive(Debug, Deserialize)]
struct SearxResponse {
    results: Vec<SearxHit>,
}

/// Client for one SearxNG instance.
///
/// Holds the validated configuration and a shared HTTP connection pool.
/// Cheap to clone; holds no mutable state, so concurrent callers need no
/// coordination.
#[derive(Debug, Clone)]
pub struct SearxClient {
    config: SearxConfig,
    client: reqwest::Client,
}

impl SearxClient {
    /// Create a client for the instance named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid, or
    /// [`SearchError::Backend`] if the HTTP client cannot be constructed.
    pub fn new(config: SearxConfig) -> Result<Self> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { config, client })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &SearxConfig {
        &self.config
    }

    /// Search the configured instance.
    ///
    /// A single named, side-effect-isolated call: the only side effect is
    /// one HTTP request, so an external tracer can wrap it without
    /// altering behaviour. Results come back in backend order, truncated
    /// to `max_results` and adapted to [`SearchResult`].
    ///
    /// `include_raw_content` asks the backend to also return full-page
    /// text where available; instances without that support return hits
    /// with no `raw_content`, which downstream formatting tolerates.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Backend`] on transport failure or a
    /// non-success HTTP status, and [`SearchError::Parse`] if the response
    /// body is not a SearxNG result payload.
    pub async fn search(
        &self,
        query: &str,
        include_raw_content: bool,
        max_results: usize,
    ) -> Result<Vec<SearchResult>> {
        tracing::trace!(query, max_results, "SearxNG search");

        let endpoint = search_endpoint(&self.config.host)?;

        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_owned()),
            ("format", "json".to_owned()),
            ("limit", max_results.to_string()),
        ];
        if !self.config.engines.is_empty() {
            params.push(("engines", self.config.engines.join(",")));
        }
        if include_raw_content {
            params.push(("include_raw_content", "true".to_owned()));
        }

        let response = self
            .client
            .get(endpoint)
            .query(&params)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Backend(format!("SearxNG request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Backend(format!("SearxNG HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Backend(format!("SearxNG response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "SearxNG response received");

        let results = parse_searx_json(&body, max_results)?;
        tracing::debug!(count = results.len(), "SearxNG results parsed");
        Ok(results)
    }

    /// Search with the configured defaults: raw content included, result
    /// count bounded by `config.max_results`.
    ///
    /// # Errors
    ///
    /// Same as [`SearxClient::search`].
    pub async fn search_default(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.search(query, true, self.config.max_results).await
    }
}

/// Join the configured host with the `search` path.
fn search_endpoint(host: &str) -> Result<Url> {
    let base = Url::parse(host)
        .map_err(|e| SearchError::Config(format!("host is not a valid URL: {e}")))?;
    base.join("search")
        .map_err(|e| SearchError::Config(format!("cannot build search endpoint: {e}")))
}

/// Parse a SearxNG JSON response body into canonical search results.
///
/// Extracted as a separate function for testability with fixture payloads.
pub(crate) fn parse_searx_json(body: &str, max_results: usize) -> Result<Vec<SearchResult>> {
    let response: SearxResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("SearxNG payload did not deserialize: {e}")))?;

    Ok(response
        .results
        .into_iter()
        .take(max_results)
        .map(SearxHit::into_result)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_SEARX_JSON: &str = r#"{
        "query": "rust programming",
        "number_of_results": 3,
        "results": [
            {
                "title": "Rust Programming Language",
                "link": "https://www.rust-lang.org/",
                "snippet": "A language empowering everyone to build reliable and efficient software.",
                "raw_content": "Rust. Reliable. Efficient. Fast."
            },
            {
                "title": "The Rust Programming Language Book",
                "link": "https://doc.rust-lang.org/book/",
                "snippet": "An introductory book about Rust."
            },
            {
                "title": "Rust (programming language) - Wikipedia",
                "link": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
                "snippet": "Rust is a multi-paradigm, general-purpose programming language."
            }
        ]
    }"#;

    #[test]
    fn parse_mock_json_maps_field_names() {
        let results = parse_searx_json(MOCK_SEARX_JSON, 10).expect("should parse");
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].url, "https://www.rust-lang.org/");
        assert!(results[0].content.contains("reliable and efficient"));
        assert_eq!(
            results[0].raw_content.as_deref(),
            Some("Rust. Reliable. Efficient. Fast.")
        );

        assert_eq!(results[1].url, "https://doc.rust-lang.org/book/");
        assert!(results[1].raw_content.is_none());
    }

    #[test]
    fn parse_respects_max_results() {
        let results = parse_searx_json(MOCK_SEARX_JSON, 2).expect("should parse");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[1].title, "The Rust Programming Language Book");
    }

    #[test]
    fn parse_empty_results_returns_empty() {
        let results = parse_searx_json(r#"{"results": []}"#, 10).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn parse_preserves_backend_order() {
        let results = parse_searx_json(MOCK_SEARX_JSON, 10).expect("should parse");
        assert!(results[0].url.contains("rust-lang.org"));
        assert!(results[2].url.contains("wikipedia.org"));
    }

    #[test]
    fn parse_rejects_non_json_body() {
        let err = parse_searx_json("<html>rate limited</html>", 10).unwrap_err();
        assert!(err.to_string().contains("deserialize"));
    }

    #[test]
    fn parse_rejects_hit_missing_required_field() {
        let body = r#"{"results": [{"title": "No link here", "snippet": "s"}]}"#;
        let err = parse_searx_json(body, 10).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn search_endpoint_joins_path() {
        let endpoint = search_endpoint("http://127.0.0.1:8080").expect("should join");
        assert_eq!(endpoint.as_str(), "http://127.0.0.1:8080/search");
    }

    #[test]
    fn search_endpoint_rejects_garbage_host() {
        assert!(search_endpoint("not a url").is_err());
    }

    #[test]
    fn client_rejects_invalid_config() {
        let config = SearxConfig {
            max_results: 0,
            ..Default::default()
        };
        let result = SearxClient::new(config);
        assert!(result.is_err());
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearxClient>();
    }

    #[test]
    fn client_exposes_config() {
        let client = SearxClient::new(SearxConfig::default()).expect("default config is valid");
        assert_eq!(client.config().max_results, 3);
    }

    #[tokio::test]
    #[ignore] // Live test, needs a SearxNG instance on localhost:8080
    async fn live_searx_search() {
        let client = SearxClient::new(SearxConfig::default()).expect("default config is valid");
        let results = client.search_default("rust programming").await;
        assert!(results.is_ok());
        let results = results.expect("live search should work");
        assert!(!results.is_empty());
        for r in &results {
            assert!(!r.title.is_empty());
            assert!(!r.url.is_empty());
        }
    }
}
