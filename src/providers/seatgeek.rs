//! SeatGeek events API adapter.
//!
//! Queries `GET /2/events` and maps each event onto the canonical record.
//! SeatGeek has broad coverage but sparse metadata: single-day listings,
//! no descriptions, no organizer, prices only as aggregate listing stats.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::geo::city_prefix;
use crate::http;
use crate::provider::{EventProviderTrait, ProviderQuery};
use crate::types::{Conference, Coordinates, Location, PriceRange, Provider, Subject};

use super::{local_date, synthesize_id};

const ENDPOINT: &str = "https://api.seatgeek.com/2/events";

/// SeatGeek events API adapter.
pub struct SeatGeekProvider;

impl EventProviderTrait for SeatGeekProvider {
    async fn search_events(
        &self,
        query: &ProviderQuery,
        config: &SearchConfig,
    ) -> Result<Vec<Conference>, SearchError> {
        let Some(client_id) = config.api_keys.seatgeek.as_deref() else {
            return Err(SearchError::NotConfigured(
                "SeatGeek client id missing".into(),
            ));
        };

        tracing::trace!(query = %query.query, "SeatGeek search");

        let client = http::build_client(config)?;

        let mut params = vec![
            ("client_id".to_string(), client_id.to_string()),
            ("q".to_string(), query.query.clone()),
            (
                "per_page".to_string(),
                config.max_results_per_provider.to_string(),
            ),
        ];
        if let Some(location) = &query.location {
            params.push(("venue.city".to_string(), city_prefix(location).to_string()));
        }
        if let Some(start) = query.start_date {
            params.push(("datetime_local.gte".to_string(), start.to_string()));
        }
        if let Some(end) = query.end_date {
            params.push(("datetime_local.lte".to_string(), end.to_string()));
        }

        let response = client
            .get(ENDPOINT)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("SeatGeek request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("SeatGeek HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("SeatGeek response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "SeatGeek response received");

        parse_seatgeek_response(&body, config.max_results_per_provider)
    }

    fn provider_type(&self) -> Provider {
        Provider::SeatGeek
    }
}

// ── Response shape ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct Event {
    id: Option<u64>,
    title: Option<String>,
    url: Option<String>,
    datetime_local: Option<String>,
    #[serde(rename = "type")]
    event_type: Option<String>,
    venue: Option<Venue>,
    stats: Option<Stats>,
}

#[derive(Debug, Deserialize)]
struct Venue {
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    location: Option<LatLon>,
}

#[derive(Debug, Deserialize)]
struct LatLon {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Stats {
    lowest_price: Option<f64>,
    highest_price: Option<f64>,
}

// ── Mapping ─────────────────────────────────────────────────────────────

/// Parse a SeatGeek events response into canonical records.
///
/// Events without a title or a parseable local datetime are skipped.
pub(crate) fn parse_seatgeek_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<Conference>, SearchError> {
    let response: EventsResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("SeatGeek response: {e}")))?;

    let mut results = Vec::new();
    for event in response.events {
        if let Some(record) = map_event(event) {
            results.push(record);
        }
        if results.len() >= max_results {
            break;
        }
    }

    tracing::debug!(count = results.len(), "SeatGeek results parsed");
    Ok(results)
}

fn map_event(event: Event) -> Option<Conference> {
    let title = event.title?;
    let start_date = event
        .datetime_local
        .as_deref()
        .and_then(local_date)?;

    let (city, state, country, coordinates) = match event.venue {
        Some(venue) => (
            venue.city.unwrap_or_default(),
            venue.state.unwrap_or_default(),
            venue.country.unwrap_or_default(),
            venue.location.and_then(|loc| {
                Some(Coordinates {
                    latitude: loc.lat?,
                    longitude: loc.lon?,
                })
            }),
        ),
        None => (String::new(), String::new(), String::new(), None),
    };

    let event_type = event.event_type.unwrap_or_default();
    let subject = match Subject::classify(&event_type) {
        Subject::Other => Subject::classify(&title),
        subject => subject,
    };

    let price = event.stats.and_then(|stats| {
        Some(PriceRange {
            min: stats.lowest_price?,
            max: stats.highest_price?,
            currency: "USD".into(),
        })
    });

    let id = event.id.map_or_else(
        || synthesize_id(&title, &city, start_date),
        |id| id.to_string(),
    );

    Some(Conference {
        id,
        title,
        subject,
        location: Location {
            city,
            state,
            country,
            coordinates,
        },
        // SeatGeek lists single occurrences; no end date is reported.
        start_date,
        end_date: start_date,
        description: String::new(),
        website: event.url,
        organizer: "SeatGeek".into(),
        attendee_count: None,
        price,
        source: Provider::SeatGeek.name().into(),
    })
}
