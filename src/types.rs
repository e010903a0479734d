//! Core types: the canonical conference record, subject categories,
//! provider identification, and user search filters.
//!
//! The canonical [`Conference`] shape is the single contract every provider
//! adapter must produce. The aggregation pipeline never inspects
//! provider-specific response shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Subject category for a conference.
///
/// A fixed enumerated set; records that cannot be classified land in the
/// [`Subject::Other`] bucket, which is not user-selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Technology,
    Healthcare,
    Business,
    Education,
    Science,
    Marketing,
    Finance,
    Environment,
    #[serde(rename = "Arts & Design")]
    ArtsDesign,
    Engineering,
    Sports,
    /// Default bucket for records no category keyword matches.
    Other,
}

impl Subject {
    /// Returns the human-readable name of this subject.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Business => "Business",
            Self::Education => "Education",
            Self::Science => "Science",
            Self::Marketing => "Marketing",
            Self::Finance => "Finance",
            Self::Environment => "Environment",
            Self::ArtsDesign => "Arts & Design",
            Self::Engineering => "Engineering",
            Self::Sports => "Sports",
            Self::Other => "Other",
        }
    }

    /// Returns the full list of user-selectable categories.
    ///
    /// [`Subject::Other`] is excluded: it is a normalization fallback, not
    /// a filter choice. A filter whose subject set covers this entire list
    /// is equivalent to no subject restriction at all.
    pub fn all() -> &'static [Subject] {
        &[
            Self::Technology,
            Self::Healthcare,
            Self::Business,
            Self::Education,
            Self::Science,
            Self::Marketing,
            Self::Finance,
            Self::Environment,
            Self::ArtsDesign,
            Self::Engineering,
            Self::Sports,
        ]
    }

    /// Classify free text (a provider category label, segment name, or
    /// event title) onto the subject enum by keyword match.
    ///
    /// Matching is case-insensitive substring containment, checked in a
    /// fixed order; the first hit wins. Unmatched text maps to
    /// [`Subject::Other`].
    pub fn classify(text: &str) -> Subject {
        let lower = text.to_lowercase();
        // "tech" is a substring of "fintech", "edtech", "biotech", so the
        // Technology bucket is checked last.
        const KEYWORDS: &[(Subject, &[&str])] = &[
            (
                Subject::Healthcare,
                &["health", "medical", "medicine", "pharma", "clinical", "nursing"],
            ),
            (
                Subject::Finance,
                &["finance", "fintech", "banking", "invest", "accounting"],
            ),
            (
                Subject::Marketing,
                &["marketing", "advertis", "brand", "seo", "social media"],
            ),
            (
                Subject::Education,
                &["education", "teaching", "learning", "academic", "edtech"],
            ),
            (
                Subject::Environment,
                &["environment", "climate", "sustainab", "renewable", "energy"],
            ),
            (
                Subject::Engineering,
                &["engineering", "manufactur", "robotic", "aerospace", "mechanical"],
            ),
            (
                Subject::Science,
                &["science", "research", "physics", "chemistry", "biology", "biotech"],
            ),
            (
                Subject::ArtsDesign,
                &["arts", "art ", "design", "creative", "theatre", "theater", "music", "film"],
            ),
            (
                Subject::Sports,
                &["sport", "fitness", "athlet", "esports"],
            ),
            (
                Subject::Business,
                &["business", "leadership", "startup", "entrepreneur", "management"],
            ),
            (
                Subject::Technology,
                &["tech", "software", "developer", "cloud", " ai", "data", "cyber", "digital"],
            ),
        ];

        for (subject, keywords) in KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                return *subject;
            }
        }
        Subject::Other
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where a conference takes place.
///
/// Coordinates are present only when the source provided a venue with
/// resolvable geocoordinates; records without them can only be filtered by
/// text matching, not by distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Ticket price range as reported by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

/// The canonical, provider-agnostic conference record.
///
/// `id` is opaque and unique per source record only; the same real-world
/// event carries different ids across providers, and collisions are
/// handled by deduplication, not by this field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: String,
    pub title: String,
    pub subject: Subject,
    pub location: Location,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub organizer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRange>,
    /// Which provider returned this record ("Fallback" for built-in data).
    pub source: String,
}

/// Supported event search providers that conf-search can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Ticketmaster Discovery API — venue coordinates and price ranges.
    Ticketmaster,
    /// Eventbrite search API — organizer and capacity detail.
    Eventbrite,
    /// SeatGeek events API — broad coverage, sparse metadata.
    SeatGeek,
}

impl Provider {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ticketmaster => "Ticketmaster",
            Self::Eventbrite => "Eventbrite",
            Self::SeatGeek => "SeatGeek",
        }
    }

    /// Returns all available provider variants, in default invocation order.
    pub fn all() -> &'static [Provider] {
        &[Self::Ticketmaster, Self::Eventbrite, Self::SeatGeek]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-specified search filters.
///
/// An empty `subjects` list and a list covering every selectable category
/// both mean "no subject restriction". Date filtering applies only when
/// both bounds are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, rename = "radius")]
    pub radius_miles: Option<f64>,
}

impl SearchFilters {
    /// Returns true iff the subject set actually narrows the result set:
    /// non-empty and not covering the full selectable category list.
    ///
    /// Membership comparison, not a count comparison, so the result stays
    /// correct if the category enumeration ever grows.
    pub fn restricts_subjects(&self) -> bool {
        if self.subjects.is_empty() {
            return false;
        }
        let selected: HashSet<Subject> = self.subjects.iter().copied().collect();
        !Subject::all().iter().all(|s| selected.contains(s))
    }

    /// Derive the free-text query handed to provider adapters.
    ///
    /// The input contract carries no query string of its own, so the
    /// closest signal is the chosen categories.
    pub fn provider_query(&self) -> String {
        if self.restricts_subjects() {
            let names: Vec<&str> = self.subjects.iter().map(Subject::name).collect();
            format!("{} conferences", names.join(" "))
        } else {
            "conferences".to_string()
        }
    }
}
