//! Trait definition for pluggable event search providers.
//!
//! Each provider (Ticketmaster, Eventbrite, SeatGeek) implements
//! [`EventProviderTrait`] to expose a uniform interface: take a query, hand
//! back canonical [`Conference`] records. Everything provider-specific
//! (URL construction, authentication, response shape) stays behind the
//! trait.

use chrono::NaiveDate;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{Conference, Provider};

/// The search request handed to every provider adapter.
///
/// Location and the date window are optional; adapters pass along whatever
/// their API supports and ignore the rest.
#[derive(Debug, Clone)]
pub struct ProviderQuery {
    /// Free-text query, derived from the user's subject selection.
    pub query: String,
    /// Free-text location, e.g. "Boston, MA".
    pub location: Option<String>,
    /// Earliest event start date to request.
    pub start_date: Option<NaiveDate>,
    /// Latest event start date to request.
    pub end_date: Option<NaiveDate>,
}

impl ProviderQuery {
    /// Build a query from the user's filters.
    pub fn from_filters(filters: &crate::types::SearchFilters) -> Self {
        Self {
            query: filters.provider_query(),
            location: if filters.location.trim().is_empty() {
                None
            } else {
                Some(filters.location.clone())
            },
            start_date: filters.start_date,
            end_date: filters.end_date,
        }
    }
}

/// A pluggable event search provider backend.
///
/// Implementors call a provider's JSON API and transform its
/// response shape into canonical [`Conference`] records. Each adapter
/// handles its own:
///
/// - URL construction with query encoding and credentials
/// - HTTP request with timeout from config
/// - JSON deserialization of the provider-specific shape
/// - Field normalization (subject classification, placeholder defaults,
///   id synthesis)
///
/// Errors returned here never reach the caller of the pipeline: the
/// orchestrator logs them and treats the provider as having returned zero
/// results. All implementations must be `Send + Sync` for concurrent
/// provider queries.
pub trait EventProviderTrait: Send + Sync {
    /// Search this provider for events matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails, the response
    /// cannot be parsed, or the provider's credentials are missing.
    fn search_events(
        &self,
        query: &ProviderQuery,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<Conference>, SearchError>> + Send;

    /// Returns which [`Provider`] variant this implementation represents.
    fn provider_type(&self) -> Provider;
}
