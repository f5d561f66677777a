//! Gateway configuration with sensible defaults.
//!
//! [`SearxConfig`] names the SearxNG instance to query and bounds request
//! behaviour. The defaults match a private instance on localhost, which is
//! the usual SearxNG deployment.

use url::Url;

use crate::error::SearchError;

/// Configuration for the SearxNG search gateway.
///
/// Use [`Default::default()`] for a local instance, or construct with
/// field overrides. Tests substitute a fake backend by pointing `host`
/// at a local fixture server; nothing in the gateway reads global state.
#[derive(Debug, Clone)]
pub struct SearxConfig {
    /// Base URL of the SearxNG instance, e.g. `http://127.0.0.1:8080`.
    pub host: String,
    /// Accept plain-HTTP hosts and invalid TLS certificates. Private
    /// instances commonly run without TLS.
    pub allow_insecure: bool,
    /// Maximum number of results a search returns.
    pub max_results: usize,
    /// Engine allow-list forwarded to the backend. An empty list omits the
    /// parameter so the instance's server-side engine set applies.
    pub engines: Vec<String>,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearxConfig {
    fn default() -> Self {
        Self {
            host: "http://127.0.0.1:8080".into(),
            allow_insecure: true,
            max_results: 3,
            engines: vec!["google".into()],
            timeout_seconds: 8,
            user_agent: None,
        }
    }
}

impl SearxConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `host` must be a parseable `http` or `https` URL
    /// - plain-HTTP hosts require `allow_insecure`
    /// - `max_results` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.host.is_empty() {
            return Err(SearchError::Config("host must not be empty".into()));
        }
        let parsed = Url::parse(&self.host)
            .map_err(|e| SearchError::Config(format!("host is not a valid URL: {e}")))?;
        match parsed.scheme() {
            "https" => {}
            "http" => {
                if !self.allow_insecure {
                    return Err(SearchError::Config(
                        "plain-HTTP host requires allow_insecure".into(),
                    ));
                }
            }
            other => {
                return Err(SearchError::Config(format!(
                    "host scheme must be http or https, got {other}"
                )));
            }
        }
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
