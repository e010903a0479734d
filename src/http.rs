//! Shared HTTP client for provider API requests.
//!
//! Provides a configured [`reqwest::Client`] with a per-request timeout
//! from config and a descriptive User-Agent. Provider APIs are JSON
//! endpoints; the client identifies itself honestly rather than rotating
//! browser strings.

use crate::config::SearchConfig;
use crate::error::SearchError;
use std::time::Duration;

/// Default User-Agent sent with every provider request.
pub const DEFAULT_USER_AGENT: &str = concat!("conf-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for provider API requests.
///
/// The client has:
/// - Timeout from config (a timeout is an ordinary adapter failure)
/// - The default descriptive User-Agent (or custom if configured)
/// - Gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
