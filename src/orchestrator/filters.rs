//! Subject, location, and date-range filtering stages.
//!
//! Each stage takes and returns a `Vec<Conference>` so the orchestrator
//! can compose them in a fixed order. A filter whose inputs are absent or
//! degenerate (empty subject set, blank location, missing date bound) is
//! a no-op, never an error.

use std::collections::HashSet;

use crate::geo::{self, CityIndex};
use crate::types::{Conference, SearchFilters, Subject};

/// Keep only records whose subject is in the filter's subject set.
///
/// Applied only when the set actually restricts: "no selection" and
/// "everything selected" are both treated as "don't filter".
pub fn filter_by_subject(records: Vec<Conference>, filters: &SearchFilters) -> Vec<Conference> {
    if !filters.restricts_subjects() {
        return records;
    }
    let selected: HashSet<Subject> = filters.subjects.iter().copied().collect();
    records
        .into_iter()
        .filter(|record| selected.contains(&record.subject))
        .collect()
}

/// Two-tier geographic filter.
///
/// Tier 1 (precise): when the search location resolves through the city
/// index AND a radius is given, records with coordinates are kept iff
/// their great-circle distance from the resolved center is within the
/// radius. Records without coordinates cannot be distance-filtered and
/// fall back to city text matching against the search location's city
/// prefix.
///
/// Tier 2 (approximate): when resolution misses (or no radius is given),
/// records are kept iff their city or state text-matches the raw location
/// string.
///
/// Both tiers are load-bearing: collapsing everything to text matching
/// changes which records survive and is a behavior regression.
pub fn filter_by_location(
    records: Vec<Conference>,
    filters: &SearchFilters,
    cities: &CityIndex,
) -> Vec<Conference> {
    let location = filters.location.trim();
    if location.is_empty() {
        return records;
    }

    match (cities.resolve(location), filters.radius_miles) {
        (Some(center), Some(radius)) => {
            let prefix = geo::city_prefix(location);
            records
                .into_iter()
                .filter(|record| match record.location.coordinates {
                    Some(coords) => geo::haversine_miles(center, coords) <= radius,
                    None => geo::text_match(&record.location.city, prefix),
                })
                .collect()
        }
        _ => records
            .into_iter()
            .filter(|record| {
                geo::text_match(&record.location.city, location)
                    || geo::text_match(&record.location.state, location)
            })
            .collect(),
    }
}

/// Keep records whose `[start, end]` interval overlaps the filter's
/// `[start, end]` interval. Closed on both ends. Applies only when both
/// filter bounds are present.
pub fn filter_by_dates(records: Vec<Conference>, filters: &SearchFilters) -> Vec<Conference> {
    let (Some(start), Some(end)) = (filters.start_date, filters.end_date) else {
        return records;
    };
    records
        .into_iter()
        .filter(|record| record.start_date <= end && record.end_date >= start)
        .collect()
}

/// Run all filter stages in pipeline order: subject, location, date.
pub fn apply_filters(
    records: Vec<Conference>,
    filters: &SearchFilters,
    cities: &CityIndex,
) -> Vec<Conference> {
    let records = filter_by_subject(records, filters);
    let records = filter_by_location(records, filters, cities);
    filter_by_dates(records, filters)
}
