//! # searx-sources
//!
//! SearxNG search gateway and source formatting for LLM context assembly.
//!
//! Two parts, no coupling beyond the shared record shape:
//!
//! - A **search gateway** ([`SearxClient`]) that issues a query to a
//!   configured SearxNG instance over its JSON API and returns normalized
//!   [`SearchResult`] records.
//! - A **source formatter** ([`format_sources`], [`bullet_sources`]) that
//!   deduplicates records by URL and renders them into a bounded-length
//!   text report.
//!
//! ## Design
//!
//! - One backend, one call: no retries, no fallback instance, no local
//!   re-ranking, no result caching
//! - Backend field names (`link`, `snippet`) are adapted to the canonical
//!   record shape at the gateway boundary, keeping the formatter
//!   backend-agnostic
//! - Raw page text is budgeted at roughly four characters per token
//! - Stateless: every call owns its input and output, so concurrent
//!   callers need no locks
//!
//! ## Security
//!
//! - No API keys to leak; a private SearxNG instance is the assumed backend
//! - No network listeners, this is a library, not a server
//! - Search queries are logged only at trace level

pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod searx;
pub mod types;

pub use config::SearxConfig;
pub use error::{Result, SearchError};
pub use format::{bullet_sources, format_sources};
pub use searx::SearxClient;
pub use types::SearchResult;

/// Search the web through a SearxNG instance.
///
/// Validates `config`, builds a one-shot client, and performs a single
/// search with the config's defaults (raw content included, result count
/// bounded by `config.max_results`).
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration and
/// [`SearchError::Backend`] or [`SearchError::Parse`] when the backend
/// call fails. Errors are never retried here.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> searx_sources::Result<()> {
/// let config = searx_sources::SearxConfig::default();
/// let results = searx_sources::search("rust programming", &config).await?;
/// println!("{}", searx_sources::format_sources(&results, 500, true));
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearxConfig) -> Result<Vec<SearchResult>> {
    let client = SearxClient::new(config.clone())?;
    client.search_default(query).await
}

/// Search with sensible default configuration.
///
/// Convenience wrapper around [`search`] using [`SearxConfig::default()`],
/// which targets a local SearxNG instance on port 8080.
///
/// # Errors
///
/// Same as [`search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> searx_sources::Result<()> {
/// let results = searx_sources::search_default("weather today").await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_default(query: &str) -> Result<Vec<SearchResult>> {
    search(query, &SearxConfig::default()).await
}
