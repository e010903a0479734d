//! Error types for the conf-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys or sensitive data appear in
//! error messages.
//!
//! Ordinary business conditions (a provider returning nothing, a city
//! missing from the lookup table, an empty aggregate result) are not
//! errors and never surface through [`SearchError`].

/// Errors that can occur during conference search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to a provider API failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a provider response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A provider is enabled but missing its API credentials.
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

/// Convenience type alias for conf-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
