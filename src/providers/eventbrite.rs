//! Eventbrite search API adapter.
//!
//! Queries `GET /v3/events/search/` with `expand=venue,organizer` and
//! maps each event onto the canonical record. Eventbrite is the best
//! source for organizer names and capacity; its search responses carry no
//! ticket prices.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::{EventProviderTrait, ProviderQuery};
use crate::types::{Conference, Coordinates, Location, Provider, Subject};

use super::{local_date, synthesize_id};

const ENDPOINT: &str = "https://www.eventbriteapi.com/v3/events/search/";

/// Eventbrite search API adapter.
pub struct EventbriteProvider;

impl EventProviderTrait for EventbriteProvider {
    async fn search_events(
        &self,
        query: &ProviderQuery,
        config: &SearchConfig,
    ) -> Result<Vec<Conference>, SearchError> {
        let Some(token) = config.api_keys.eventbrite.as_deref() else {
            return Err(SearchError::NotConfigured(
                "Eventbrite OAuth token missing".into(),
            ));
        };

        tracing::trace!(query = %query.query, "Eventbrite search");

        let client = http::build_client(config)?;

        let mut params = vec![
            ("q".to_string(), query.query.clone()),
            ("expand".to_string(), "venue,organizer".to_string()),
        ];
        if let Some(location) = &query.location {
            params.push(("location.address".to_string(), location.clone()));
        }
        if let Some(start) = query.start_date {
            params.push((
                "start_date.range_start".to_string(),
                format!("{start}T00:00:00"),
            ));
        }
        if let Some(end) = query.end_date {
            params.push((
                "start_date.range_end".to_string(),
                format!("{end}T23:59:59"),
            ));
        }

        let response = client
            .get(ENDPOINT)
            .bearer_auth(token)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Eventbrite request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Eventbrite HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Eventbrite response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "Eventbrite response received");

        parse_eventbrite_response(&body, config.max_results_per_provider)
    }

    fn provider_type(&self) -> Provider {
        Provider::Eventbrite
    }
}

// ── Response shape ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct Event {
    id: Option<String>,
    name: Option<TextField>,
    summary: Option<String>,
    description: Option<TextField>,
    url: Option<String>,
    start: Option<LocalTime>,
    end: Option<LocalTime>,
    capacity: Option<u32>,
    organizer: Option<Organizer>,
    venue: Option<Venue>,
}

#[derive(Debug, Deserialize)]
struct TextField {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocalTime {
    local: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Organizer {
    name: Option<String>,
}

/// Venue lat/long come back as strings.
#[derive(Debug, Deserialize)]
struct Venue {
    address: Option<Address>,
    latitude: Option<String>,
    longitude: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
}

// ── Mapping ─────────────────────────────────────────────────────────────

/// Parse an Eventbrite search response into canonical records.
///
/// Events without a title or a parseable start date are skipped.
pub(crate) fn parse_eventbrite_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<Conference>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("Eventbrite response: {e}")))?;

    let mut results = Vec::new();
    for event in response.events {
        if let Some(record) = map_event(event) {
            results.push(record);
        }
        if results.len() >= max_results {
            break;
        }
    }

    tracing::debug!(count = results.len(), "Eventbrite results parsed");
    Ok(results)
}

fn map_event(event: Event) -> Option<Conference> {
    let title = event.name.and_then(|n| n.text)?;
    let start_date = event
        .start
        .as_ref()
        .and_then(|s| s.local.as_deref())
        .and_then(local_date)?;
    let end_date = event
        .end
        .as_ref()
        .and_then(|e| e.local.as_deref())
        .and_then(local_date)
        .unwrap_or(start_date);

    let (city, state, country, coordinates) = match event.venue {
        Some(venue) => {
            let coordinates = (|| {
                let latitude = venue.latitude.as_deref()?.parse().ok()?;
                let longitude = venue.longitude.as_deref()?.parse().ok()?;
                Some(Coordinates {
                    latitude,
                    longitude,
                })
            })();
            match venue.address {
                Some(address) => (
                    address.city.unwrap_or_default(),
                    address.region.unwrap_or_default(),
                    address.country.unwrap_or_default(),
                    coordinates,
                ),
                None => (String::new(), String::new(), String::new(), coordinates),
            }
        }
        None => (String::new(), String::new(), String::new(), None),
    };

    let description = event
        .summary
        .or(event.description.and_then(|d| d.text))
        .unwrap_or_default();
    let subject = Subject::classify(&format!("{title} {description}"));

    let id = event
        .id
        .unwrap_or_else(|| synthesize_id(&title, &city, start_date));

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
        start_date,
        end_date,
        description,
        website: event.url,
        organizer: event
            .organizer
            .and_then(|o| o.name)
            .unwrap_or_else(|| "Eventbrite".into()),
        attendee_count: event.capacity,
        price: None,
        source: Provider::Eventbrite.name().into(),
    })
}
