//! # conf-search
//!
//! Client-side conference search aggregation.
//!
//! This crate fans a search out to several third-party event APIs,
//! normalizes their heterogeneous responses into one canonical record
//! shape, merges and deduplicates the results, and applies the user's
//! subject, location-radius, and date-range filters. It compiles into a
//! host application as a library dependency. There is no server and no
//! persistent storage; all state lives for the duration of one search.
//!
//! ## Design
//!
//! - Queries Ticketmaster, Eventbrite, and SeatGeek concurrently and
//!   merges results in a fixed provider order
//! - Deduplicates by normalized title + start date, keeping the record
//!   with the higher completeness score on collision
//! - Filters by subject set, great-circle distance from a named city
//!   (with a text-matching tier for unresolvable locations and
//!   coordinate-less records), and date-range overlap
//! - Falls back to a small built-in dataset when no live result survives,
//!   so callers always receive a deterministic list
//! - Graceful degradation: a failing provider contributes zero results
//!   and never fails the search
//!
//! ## Security
//!
//! - API credentials stay in [`SearchConfig`] and never appear in errors
//!   or logs
//! - No network listeners: a library, not a server
//! - Search queries are logged only at trace level

pub mod config;
pub mod dataset;
pub mod error;
pub mod fallback;
pub mod geo;
pub mod http;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod types;

pub use config::{ProviderKeys, SearchConfig};
pub use error::{Result, SearchError};
pub use provider::{EventProviderTrait, ProviderQuery};
pub use types::{Conference, Coordinates, Location, PriceRange, Provider, SearchFilters, Subject};

/// Search for conferences across all configured providers.
///
/// Runs the full aggregation pipeline: concurrent fan-out, merge, dedup,
/// subject/location/date filtering, fallback substitution, and a final
/// sort ascending by start date.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid. Ordinary
/// business conditions (provider failures, unknown cities, zero matches)
/// never produce an error; the result is a (possibly empty) list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> conf_search::Result<()> {
/// use conf_search::{SearchConfig, SearchFilters, Subject};
///
/// let filters = SearchFilters {
///     subjects: vec![Subject::Technology],
///     location: "San Francisco, CA".into(),
///     radius_miles: Some(50.0),
///     ..Default::default()
/// };
/// let results = conf_search::search(&filters, &SearchConfig::default()).await?;
/// for conference in &results {
///     println!("{}: {}", conference.start_date, conference.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    filters: &SearchFilters,
    config: &SearchConfig,
) -> Result<Vec<Conference>> {
    config.validate()?;
    orchestrator::search::orchestrate_search(filters, config).await
}

/// Search with sensible default configuration.
///
/// Convenience wrapper around [`search`] using [`SearchConfig::default()`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(filters: &SearchFilters) -> Result<Vec<Conference>> {
    search(filters, &SearchConfig::default()).await
}
