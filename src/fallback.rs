//! Built-in fallback dataset.
//!
//! When every provider fails or filtering leaves nothing, the pipeline
//! substitutes this small fixed list and runs the same filter stages over
//! it, so callers always receive a deterministic result instead of an
//! error. Records here are fully populated: coordinates, descriptions,
//! websites, organizers.

use crate::types::{Conference, Coordinates, Location, PriceRange, Subject};

/// Source label carried by fallback records.
pub const FALLBACK_SOURCE: &str = "Fallback";

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    subject: Subject,
    city: &str,
    state: &str,
    latitude: f64,
    longitude: f64,
    start_date: &str,
    end_date: &str,
    description: &str,
    website: &str,
    organizer: &str,
    attendee_count: u32,
    price_min: f64,
    price_max: f64,
) -> Conference {
    Conference {
        id: id.into(),
        title: title.into(),
        subject,
        location: Location {
            city: city.into(),
            state: state.into(),
            country: "US".into(),
            coordinates: Some(Coordinates {
                latitude,
                longitude,
            }),
        },
        start_date: start_date.parse().expect("fallback start date is valid"),
        end_date: end_date.parse().expect("fallback end date is valid"),
        description: description.into(),
        website: Some(website.into()),
        organizer: organizer.into(),
        attendee_count: Some(attendee_count),
        price: Some(PriceRange {
            min: price_min,
            max: price_max,
            currency: "USD".into(),
        }),
        source: FALLBACK_SOURCE.into(),
    }
}

/// The built-in example records, in a fixed order.
pub fn builtin_conferences() -> Vec<Conference> {
    vec![
        record(
            "fb-001",
            "Global Tech Summit",
            Subject::Technology,
            "San Francisco",
            "CA",
            37.7749,
            -122.4194,
            "2024-09-12",
            "2024-09-14",
            "Three days of keynotes and workshops on cloud platforms, developer tooling, and applied machine learning.",
            "https://globaltechsummit.io",
            "Bay Area Tech Council",
            4500,
            299.0,
            899.0,
        ),
        record(
            "fb-002",
            "New England Healthcare Innovation Forum",
            Subject::Healthcare,
            "Boston",
            "MA",
            42.3601,
            -71.0589,
            "2024-06-10",
            "2024-06-11",
            "Clinicians, payers, and startups on care delivery, digital health records, and hospital operations.",
            "https://nehealthforum.org",
            "New England Health Alliance",
            1200,
            150.0,
            450.0,
        ),
        record(
            "fb-003",
            "Future of Finance Forum",
            Subject::Finance,
            "New York",
            "NY",
            40.7128,
            -74.0060,
            "2024-10-03",
            "2024-10-04",
            "Capital markets, payments infrastructure, and regulation with speakers from banks and fintech firms.",
            "https://futurefinanceforum.com",
            "Financial Markets Institute",
            2000,
            400.0,
            1200.0,
        ),
        record(
            "fb-004",
            "Climate Action Conference",
            Subject::Environment,
            "Seattle",
            "WA",
            47.6062,
            -122.3321,
            "2024-08-22",
            "2024-08-23",
            "Policy makers and researchers on decarbonization pathways, renewable grids, and adaptation planning.",
            "https://climateactionconf.org",
            "Pacific Climate Coalition",
            900,
            75.0,
            250.0,
        ),
        record(
            "fb-005",
            "Life Sciences Research Congress",
            Subject::Science,
            "San Diego",
            "CA",
            32.7157,
            -117.1611,
            "2024-07-16",
            "2024-07-18",
            "Genomics, drug discovery, and lab automation across three days of peer-reviewed sessions and posters.",
            "https://lifesciencescongress.org",
            "American Research Society",
            3100,
            350.0,
            950.0,
        ),
        record(
            "fb-006",
            "EdTech Leaders Summit",
            Subject::Education,
            "Austin",
            "TX",
            30.2672,
            -97.7431,
            "2024-11-07",
            "2024-11-08",
            "District leaders and platform builders on classroom technology, accessibility, and learning outcomes.",
            "https://edtechleaders.org",
            "Education Forward",
            800,
            120.0,
            380.0,
        ),
        record(
            "fb-007",
            "Modern Marketing Week",
            Subject::Marketing,
            "Chicago",
            "IL",
            41.8781,
            -87.6298,
            "2025-03-05",
            "2025-03-07",
            "Brand strategy, measurement, and creative operations for consumer and B2B marketing teams.",
            "https://modernmarketingweek.com",
            "Marketing Guild of America",
            1700,
            250.0,
            700.0,
        ),
        record(
            "fb-008",
            "International Engineering Expo",
            Subject::Engineering,
            "Houston",
            "TX",
            29.7604,
            -95.3698,
            "2025-04-15",
            "2025-04-17",
            "Industrial automation, materials, and infrastructure engineering with a large exhibitor floor.",
            "https://intlengexpo.com",
            "Society of Industrial Engineers",
            5200,
            180.0,
            620.0,
        ),
        record(
            "fb-009",
            "Design Matters",
            Subject::ArtsDesign,
            "Portland",
            "OR",
            45.5152,
            -122.6784,
            "2025-05-20",
            "2025-05-21",
            "Product design, typography, and creative practice talks from studios and in-house teams.",
            "https://designmatters.live",
            "Pacific Design Collective",
            650,
            90.0,
            290.0,
        ),
        record(
            "fb-010",
            "Sports Analytics Conference",
            Subject::Sports,
            "Denver",
            "CO",
            39.7392,
            -104.9903,
            "2025-02-12",
            "2025-02-13",
            "Front offices and broadcasters on player tracking data, wearables, and in-game decision models.",
            "https://sportsanalyticsconf.com",
            "Mountain Analytics Group",
            1100,
            200.0,
            550.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::completeness::completeness_score;
    use crate::orchestrator::key::dedup_key;
    use std::collections::HashSet;

    #[test]
    fn dataset_is_deterministic() {
        let a = builtin_conferences();
        let b = builtin_conferences();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.start_date, y.start_date);
        }
    }

    #[test]
    fn dataset_keys_are_unique() {
        let records = builtin_conferences();
        let keys: HashSet<String> = records.iter().map(dedup_key).collect();
        assert_eq!(keys.len(), records.len());
    }

    #[test]
    fn all_records_fully_populated() {
        for record in builtin_conferences() {
            assert_eq!(
                completeness_score(&record),
                8,
                "{} should be fully populated",
                record.title
            );
            assert_eq!(record.source, FALLBACK_SOURCE);
            assert!(record.start_date <= record.end_date);
        }
    }

    #[test]
    fn includes_boston_healthcare_record_in_2024() {
        let records = builtin_conferences();
        let boston = records
            .iter()
            .find(|r| r.subject == crate::types::Subject::Healthcare && r.location.city == "Boston")
            .expect("a Boston healthcare record exists");
        assert_eq!(boston.start_date.to_string(), "2024-06-10");
    }
}
