//! Completeness scoring for deduplication tie-breaks.
//!
//! When two sources report the same event, the record carrying more
//! useful information wins. The score is a 0–8 sum of independent boolean
//! contributions:
//!
//! ```text
//! +2  has geocoordinates
//! +2  description longer than 50 characters
//! +1  has price information
//! +1  has attendee count
//! +1  website present and not a placeholder
//! +1  organizer present and not a known generic placeholder
//! ```
//!
//! Pure function of one record; consults no global state. It ranks
//! nothing; it only breaks dedup collisions.

use url::Url;

use crate::types::Conference;

/// Hostnames that signal "no real event link".
const PLACEHOLDER_HOSTS: &[&str] = &[
    "example.com",
    "www.example.com",
    "example.org",
    "www.example.org",
];

/// Organizer strings that providers emit when they have no real organizer
/// info. Compared lowercased and trimmed.
const GENERIC_ORGANIZERS: &[&str] = &[
    "event organizer",
    "various organizers",
    "organizer",
    "tba",
    "to be announced",
    "eventbrite",
    "ticketmaster",
    "seatgeek",
];

/// Compute the completeness score for one record.
pub fn completeness_score(record: &Conference) -> u8 {
    let mut score = 0;
    if record.location.coordinates.is_some() {
        score += 2;
    }
    if record.description.chars().count() > 50 {
        score += 2;
    }
    if record.price.is_some() {
        score += 1;
    }
    if record.attendee_count.is_some() {
        score += 1;
    }
    if has_real_website(record.website.as_deref()) {
        score += 1;
    }
    if has_real_organizer(&record.organizer) {
        score += 1;
    }
    score
}

/// A website counts only if present, parseable, and not a placeholder
/// host.
fn has_real_website(website: Option<&str>) -> bool {
    let Some(raw) = website else {
        return false;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "#" {
        return false;
    }
    match Url::parse(trimmed) {
        Ok(url) => url
            .host_str()
            .is_some_and(|host| !PLACEHOLDER_HOSTS.contains(&host)),
        Err(_) => false,
    }
}

/// An organizer counts only if non-empty and not one of the known generic
/// placeholder strings.
fn has_real_organizer(organizer: &str) -> bool {
    let normalized = organizer.trim().to_lowercase();
    !normalized.is_empty() && !GENERIC_ORGANIZERS.contains(&normalized.as_str())
}
