//! Ticketmaster Discovery API adapter.
//!
//! Queries `GET /discovery/v2/events.json` and maps each embedded event
//! onto the canonical record. Ticketmaster is the richest source for
//! venue coordinates and price ranges; it never reports attendee counts.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::geo::city_prefix;
use crate::http;
use crate::provider::{EventProviderTrait, ProviderQuery};
use crate::types::{Conference, Coordinates, Location, PriceRange, Provider, Subject};

use super::{local_date, synthesize_id};

const ENDPOINT: &str = "https://app.ticketmaster.com/discovery/v2/events.json";

/// Ticketmaster Discovery API adapter.
pub struct TicketmasterProvider;

impl EventProviderTrait for TicketmasterProvider {
    async fn search_events(
        &self,
        query: &ProviderQuery,
        config: &SearchConfig,
    ) -> Result<Vec<Conference>, SearchError> {
        let Some(api_key) = config.api_keys.ticketmaster.as_deref() else {
            return Err(SearchError::NotConfigured(
                "Ticketmaster API key missing".into(),
            ));
        };

        tracing::trace!(query = %query.query, "Ticketmaster search");

        let client = http::build_client(config)?;

        let mut params = vec![
            ("apikey".to_string(), api_key.to_string()),
            ("keyword".to_string(), query.query.clone()),
            (
                "size".to_string(),
                config.max_results_per_provider.to_string(),
            ),
        ];
        if let Some(location) = &query.location {
            params.push(("city".to_string(), city_prefix(location).to_string()));
        }
        if let Some(start) = query.start_date {
            params.push(("startDateTime".to_string(), format!("{start}T00:00:00Z")));
        }
        if let Some(end) = query.end_date {
            params.push(("endDateTime".to_string(), format!("{end}T23:59:59Z")));
        }

        let response = client
            .get(ENDPOINT)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Ticketmaster request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Ticketmaster HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Ticketmaster response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "Ticketmaster response received");

        parse_ticketmaster_response(&body, config.max_results_per_provider)
    }

    fn provider_type(&self) -> Provider {
        Provider::Ticketmaster
    }
}

// ── Response shape ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DiscoveryResponse {
    /// Absent entirely when the query matches nothing.
    #[serde(rename = "_embedded")]
    embedded: Option<Embedded>,
}

#[derive(Debug, Deserialize)]
struct Embedded {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct Event {
    id: Option<String>,
    name: String,
    url: Option<String>,
    info: Option<String>,
    description: Option<String>,
    dates: Option<Dates>,
    #[serde(rename = "priceRanges", default)]
    price_ranges: Vec<ApiPriceRange>,
    #[serde(default)]
    classifications: Vec<Classification>,
    promoter: Option<Promoter>,
    #[serde(rename = "_embedded")]
    embedded: Option<EventEmbedded>,
}

#[derive(Debug, Deserialize)]
struct Dates {
    start: Option<DateEntry>,
    end: Option<DateEntry>,
}

#[derive(Debug, Deserialize)]
struct DateEntry {
    #[serde(rename = "localDate")]
    local_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiPriceRange {
    min: Option<f64>,
    max: Option<f64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Classification {
    segment: Option<Segment>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Promoter {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventEmbedded {
    #[serde(default)]
    venues: Vec<Venue>,
}

#[derive(Debug, Deserialize)]
struct Venue {
    city: Option<Named>,
    state: Option<StateRef>,
    country: Option<CountryRef>,
    location: Option<VenueLocation>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StateRef {
    #[serde(rename = "stateCode")]
    state_code: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountryRef {
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

/// Coordinates come back as strings in Discovery responses.
#[derive(Debug, Deserialize)]
struct VenueLocation {
    latitude: Option<String>,
    longitude: Option<String>,
}

// ── Mapping ─────────────────────────────────────────────────────────────

/// Parse a Discovery response body into canonical records.
///
/// Events without a parseable start date are skipped. A response with no
/// `_embedded` block is an empty result set, not a parse error.
pub(crate) fn parse_ticketmaster_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<Conference>, SearchError> {
    let response: DiscoveryResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("Ticketmaster response: {e}")))?;

    let events = response
        .embedded
        .map(|e| e.events)
        .unwrap_or_default();

    let mut results = Vec::new();
    for event in events {
        if let Some(record) = map_event(event) {
            results.push(record);
        }
        if results.len() >= max_results {
            break;
        }
    }

    tracing::debug!(count = results.len(), "Ticketmaster results parsed");
    Ok(results)
}

fn map_event(event: Event) -> Option<Conference> {
    let start_raw = event
        .dates
        .as_ref()
        .and_then(|d| d.start.as_ref())
        .and_then(|s| s.local_date.as_deref())?;
    let start_date = local_date(start_raw)?;
    let end_date = event
        .dates
        .as_ref()
        .and_then(|d| d.end.as_ref())
        .and_then(|e| e.local_date.as_deref())
        .and_then(local_date)
        .unwrap_or(start_date);

    let venue = event.embedded.and_then(|e| e.venues.into_iter().next());
    let (city, state, country, coordinates) = match venue {
        Some(venue) => {
            let city = venue.city.and_then(|c| c.name).unwrap_or_default();
            let state = venue
                .state
                .and_then(|s| s.state_code.or(s.name))
                .unwrap_or_default();
            let country = venue
                .country
                .and_then(|c| c.country_code)
                .unwrap_or_default();
            let coordinates = venue.location.and_then(|loc| {
                let latitude = loc.latitude?.parse().ok()?;
                let longitude = loc.longitude?.parse().ok()?;
                Some(Coordinates {
                    latitude,
                    longitude,
                })
            });
            (city, state, country, coordinates)
        }
        None => (String::new(), String::new(), String::new(), None),
    };

    let segment = event
        .classifications
        .first()
        .and_then(|c| c.segment.as_ref())
        .and_then(|s| s.name.as_deref())
        .unwrap_or_default();
    let subject = classify_with_title(segment, &event.name);

    let price = event.price_ranges.into_iter().next().and_then(|range| {
        Some(PriceRange {
            min: range.min?,
            max: range.max?,
            currency: range.currency.unwrap_or_else(|| "USD".into()),
        })
    });

    let id = event
        .id
        .unwrap_or_else(|| synthesize_id(&event.name, &city, start_date));

    Some(Conference {
        id,
        title: event.name,
        subject,
        location: Location {
            city,
            state,
            country,
            coordinates,
        },
        start_date,
        end_date,
        description: event.info.or(event.description).unwrap_or_default(),
        website: event.url,
        organizer: event
            .promoter
            .and_then(|p| p.name)
            .unwrap_or_else(|| "Ticketmaster".into()),
        attendee_count: None,
        price,
        source: Provider::Ticketmaster.name().into(),
    })
}

/// Classify from the segment label first, then the event title.
fn classify_with_title(segment: &str, title: &str) -> Subject {
    match Subject::classify(segment) {
        Subject::Other => Subject::classify(title),
        subject => subject,
    }
}
