//! Client configuration for the repository-search endpoint.

use std::time::Duration;

/// Configuration for [`crate::request::SearchRequest`].
///
/// Defaults target the production endpoint; integration tests override
/// `endpoint` to point at a local server. Nothing else about the exchange
/// is configurable: the resource path and query parameter name are fixed.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the search API host.
    pub endpoint: String,
    /// Maximum time to wait for a response.
    pub request_timeout: Duration,
    /// User-Agent header value; the API rejects anonymous clients.
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.github.com".to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("reposcout/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
