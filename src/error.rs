//! Error types for the searx-sources crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No credentials or sensitive data appear in
//! error messages.

/// Errors that can occur during search gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search backend failed: transport error or non-success HTTP status.
    /// Never retried here; the caller decides what to do.
    #[error("search backend error: {0}")]
    Backend(String),

    /// The backend response could not be parsed as a result payload.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid gateway configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for searx-sources results.
pub type Result<T> = std::result::Result<T, SearchError>;
