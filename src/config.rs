//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which providers are queried, timeouts, page
//! size, and the injected city-coordinate table used by geographic
//! filtering.

use crate::error::SearchError;
use crate::geo::CityIndex;
use crate::types::Provider;

/// Per-provider API credentials.
///
/// A provider whose key is absent fails with
/// [`SearchError::NotConfigured`], which the orchestrator treats like any
/// other adapter failure: zero results from that source.
#[derive(Debug, Clone, Default)]
pub struct ProviderKeys {
    /// Eventbrite OAuth token.
    pub eventbrite: Option<String>,
    /// Ticketmaster Discovery API key.
    pub ticketmaster: Option<String>,
    /// SeatGeek client id.
    pub seatgeek: Option<String>,
}

/// Configuration for a conference search operation.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Which providers to query. Queried concurrently; results are merged
    /// in this order regardless of completion order.
    pub providers: Vec<Provider>,
    /// Per-provider HTTP request timeout in seconds. A timed-out provider
    /// is an ordinary failure, not an error.
    pub timeout_seconds: u64,
    /// Page size requested from each provider. One page per provider; no
    /// further pagination.
    pub max_results_per_provider: usize,
    /// Custom User-Agent string. If `None`, a descriptive default is used.
    pub user_agent: Option<String>,
    /// Per-provider API credentials.
    pub api_keys: ProviderKeys,
    /// City-coordinate lookup table for geographic filtering. Read-only at
    /// request time; swap it out to extend coverage or to stub geocoding
    /// in tests.
    pub cities: CityIndex,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            providers: Provider::all().to_vec(),
            timeout_seconds: 8,
            max_results_per_provider: 50,
            user_agent: None,
            api_keys: ProviderKeys::default(),
            cities: CityIndex::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `max_results_per_provider` must be greater than 0
    /// - `providers` must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_results_per_provider == 0 {
            return Err(SearchError::Config(
                "max_results_per_provider must be greater than 0".into(),
            ));
        }
        if self.providers.is_empty() {
            return Err(SearchError::Config(
                "at least one provider must be enabled".into(),
            ));
        }
        Ok(())
    }
}
