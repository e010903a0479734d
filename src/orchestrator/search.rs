//! Core search orchestrator: concurrent provider fan-out, merge, dedup,
//! filter, fallback, sort.
//!
//! Provider failures never surface to the caller: a failed adapter is
//! zero results from that source. The pipeline always produces a list,
//! substituting the built-in fallback dataset when nothing survives the
//! live merge and filters.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fallback;
use crate::provider::{EventProviderTrait, ProviderQuery};
use crate::providers::{EventbriteProvider, SeatGeekProvider, TicketmasterProvider};
use crate::types::{Conference, Provider, SearchFilters};

use super::dedup::deduplicate;
use super::filters::apply_filters;

/// Orchestrate a concurrent search across all enabled providers.
///
/// # Pipeline
///
/// 1. Fan out the query to each [`Provider`] in `config.providers` with
///    [`futures::future::join_all`]
/// 2. Merge results in provider-invocation order (not completion order,
///    so output is deterministic for the same inputs); log failures at
///    warn level and treat them as zero results
/// 3. Deduplicate by normalized title + start date, completeness score
///    breaking collisions
/// 4. Apply the subject, location, and date filter stages
/// 5. If nothing survived (including the case where every provider
///    failed), substitute the built-in fallback dataset and apply the
///    identical filter stages to it
/// 6. Stable-sort ascending by start date
pub async fn orchestrate_search(
    filters: &SearchFilters,
    config: &SearchConfig,
) -> Result<Vec<Conference>, SearchError> {
    let query = ProviderQuery::from_filters(filters);

    // 1. Fan out to all providers concurrently.
    let futures: Vec<_> = config
        .providers
        .iter()
        .map(|provider| {
            let q = query.clone();
            let cfg = config.clone();
            let p = *provider;
            async move {
                let outcome = query_provider(p, &q, &cfg).await;
                (p, outcome)
            }
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    // 2. Merge in invocation order, logging failures.
    let mut merged: Vec<Conference> = Vec::new();
    for (provider, outcome) in outcomes {
        match outcome {
            Ok(records) => {
                tracing::debug!(%provider, count = records.len(), "provider returned records");
                merged.extend(records);
            }
            Err(err) => {
                tracing::warn!(provider = %provider, error = %err, "provider query failed");
            }
        }
    }

    // 3. Deduplicate across sources.
    let deduped = deduplicate(merged);

    // 4. Filter stages: subject, location, date.
    let mut results = apply_filters(deduped, filters, &config.cities);

    // 5. Fallback dataset when nothing survived, filtered identically.
    if results.is_empty() {
        tracing::debug!("no live results; substituting built-in dataset");
        results = apply_filters(fallback::builtin_conferences(), filters, &config.cities);
    }

    // 6. Stable sort ascending by start date; ties keep input order.
    results.sort_by_key(|record| record.start_date);

    Ok(results)
}

/// Query a single provider, dispatching to the concrete implementation.
async fn query_provider(
    provider: Provider,
    query: &ProviderQuery,
    config: &SearchConfig,
) -> Result<Vec<Conference>, SearchError> {
    match provider {
        Provider::Ticketmaster => TicketmasterProvider.search_events(query, config).await,
        Provider::Eventbrite => EventbriteProvider.search_events(query, config).await,
        Provider::SeatGeek => SeatGeekProvider.search_events(query, config).await,
    }
}
