//! Integration tests for the aggregation pipeline.
//!
//! These tests exercise the full merge → dedup → filter → fallback → sort
//! pipeline using synthetic records (no network calls). Tests that hit
//! live provider APIs are marked `#[ignore]` for manual validation.

use conf_search::fallback;
use conf_search::geo::CityIndex;
use conf_search::orchestrator::dedup::deduplicate;
use conf_search::orchestrator::filters::apply_filters;
use conf_search::types::{Conference, Coordinates, Location, PriceRange, Subject};
use conf_search::{SearchConfig, SearchFilters};

fn make_record(title: &str, start_date: &str, source: &str) -> Conference {
    Conference {
        id: format!("{source}-{title}").to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        subject: Subject::Technology,
        location: Location {
            city: "Austin".into(),
            state: "TX".into(),
            country: "US".into(),
            coordinates: None,
        },
        start_date: start_date.parse().expect("valid date"),
        end_date: start_date.parse().expect("valid date"),
        description: String::new(),
        website: None,
        organizer: String::new(),
        attendee_count: None,
        price: None,
        source: source.to_string(),
    }
}

/// Simulate the post-merge pipeline without network calls: concatenated
/// provider results in, filtered and sorted list out.
fn run_pipeline(
    provider_results: Vec<Vec<Conference>>,
    filters: &SearchFilters,
    cities: &CityIndex,
) -> Vec<Conference> {
    // 1. Merge in provider-invocation order.
    let merged: Vec<Conference> = provider_results.into_iter().flatten().collect();

    // 2. Deduplicate by normalized title + start date.
    let deduped = deduplicate(merged);

    // 3. Subject, location, and date filter stages.
    let mut results = apply_filters(deduped, filters, cities);

    // 4. Fallback dataset when nothing survived, filtered identically.
    if results.is_empty() {
        results = apply_filters(fallback::builtin_conferences(), filters, cities);
    }

    // 5. Stable sort ascending by start date.
    results.sort_by_key(|record| record.start_date);
    results
}

#[test]
fn cross_provider_duplicate_resolved_by_completeness() {
    // Two providers return the same event with different completeness:
    // coordinates + price on one side, nothing on the other.
    let mut rich = make_record("Tech Summit 2025", "2025-06-15", "Ticketmaster");
    rich.location.coordinates = Some(Coordinates {
        latitude: 37.7749,
        longitude: -122.4194,
    });
    rich.price = Some(PriceRange {
        min: 99.0,
        max: 499.0,
        currency: "USD".into(),
    });
    let sparse = make_record("TECH  summit 2025", "2025-06-15", "SeatGeek");

    let results = run_pipeline(
        vec![vec![sparse], vec![rich]],
        &SearchFilters::default(),
        &CityIndex::default(),
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, "Ticketmaster");
    assert!(results[0].location.coordinates.is_some());
}

#[test]
fn healthcare_in_boston_excludes_seattle() {
    let mut boston = make_record("Health Forum East", "2024-06-10", "Eventbrite");
    boston.subject = Subject::Healthcare;
    boston.location = Location {
        city: "Boston".into(),
        state: "MA".into(),
        country: "US".into(),
        coordinates: Some(Coordinates {
            latitude: 42.3601,
            longitude: -71.0589,
        }),
    };

    let mut seattle = make_record("Health Forum West", "2024-07-10", "Eventbrite");
    seattle.subject = Subject::Healthcare;
    seattle.location = Location {
        city: "Seattle".into(),
        state: "WA".into(),
        country: "US".into(),
        coordinates: Some(Coordinates {
            latitude: 47.6062,
            longitude: -122.3321,
        }),
    };

    let filters = SearchFilters {
        subjects: vec![Subject::Healthcare],
        location: "Boston, MA".into(),
        start_date: Some("2024-01-01".parse().expect("valid date")),
        end_date: Some("2024-12-31".parse().expect("valid date")),
        radius_miles: Some(50.0),
    };

    let results = run_pipeline(
        vec![vec![boston, seattle]],
        &filters,
        &CityIndex::default(),
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].location.city, "Boston");
}

#[test]
fn empty_provider_results_trigger_fallback() {
    let filters = SearchFilters::default();
    let results = run_pipeline(vec![vec![], vec![], vec![]], &filters, &CityIndex::default());

    let expected = {
        let mut records = apply_filters(
            fallback::builtin_conferences(),
            &filters,
            &CityIndex::default(),
        );
        records.sort_by_key(|record| record.start_date);
        records
    };

    assert_eq!(results.len(), expected.len());
    for (got, want) in results.iter().zip(&expected) {
        assert_eq!(got.id, want.id);
    }
}

#[test]
fn fallback_is_filtered_like_live_results() {
    let filters = SearchFilters {
        subjects: vec![Subject::Healthcare],
        ..Default::default()
    };
    let results = run_pipeline(vec![], &filters, &CityIndex::default());
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.subject == Subject::Healthcare));
}

#[test]
fn full_subject_list_matches_empty_subject_list() {
    let records = vec![
        make_record("Conf A", "2025-01-10", "Ticketmaster"),
        make_record("Conf B", "2025-02-10", "Eventbrite"),
    ];

    let empty = SearchFilters::default();
    let full = SearchFilters {
        subjects: Subject::all().to_vec(),
        ..Default::default()
    };

    let from_empty = run_pipeline(vec![records.clone()], &empty, &CityIndex::default());
    let from_full = run_pipeline(vec![records], &full, &CityIndex::default());

    let ids = |v: &[Conference]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&from_empty), ids(&from_full));
}

#[test]
fn single_day_record_on_window_boundary_included() {
    let record = make_record("One Day Workshop", "2024-06-01", "Eventbrite");
    let filters = SearchFilters {
        start_date: Some("2024-06-01".parse().expect("valid date")),
        end_date: Some("2024-06-01".parse().expect("valid date")),
        ..Default::default()
    };
    let results = run_pipeline(vec![vec![record]], &filters, &CityIndex::default());
    assert_eq!(results.len(), 1);
}

#[test]
fn results_sorted_ascending_by_start_date() {
    let records = vec![
        make_record("December Conf", "2025-12-01", "Ticketmaster"),
        make_record("March Conf", "2025-03-01", "Eventbrite"),
        make_record("July Conf", "2025-07-01", "SeatGeek"),
    ];
    let results = run_pipeline(
        vec![records],
        &SearchFilters::default(),
        &CityIndex::default(),
    );
    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].start_date <= pair[1].start_date);
    }
    assert_eq!(results[0].title, "March Conf");
}

#[test]
fn merge_order_is_provider_invocation_order_before_sort() {
    // Same start date everywhere: the stable sort must preserve the
    // merged (invocation) order, not completion or alphabetical order.
    let first = vec![make_record("Zeta Conf", "2025-05-05", "Ticketmaster")];
    let second = vec![make_record("Alpha Conf", "2025-05-05", "Eventbrite")];

    let results = run_pipeline(
        vec![first, second],
        &SearchFilters::default(),
        &CityIndex::default(),
    );
    assert_eq!(results[0].title, "Zeta Conf");
    assert_eq!(results[1].title, "Alpha Conf");
}

#[tokio::test]
async fn search_without_credentials_serves_fallback() {
    // Every provider fails fast with NotConfigured; no network involved.
    let filters = SearchFilters {
        subjects: vec![Subject::Technology],
        ..Default::default()
    };
    let results = conf_search::search(&filters, &SearchConfig::default())
        .await
        .expect("pipeline never errors for business conditions");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.subject == Subject::Technology));
}

// ── Live integration tests (require network and credentials) ────────────
// Run with: cargo test --test pipeline_integration live_ -- --ignored

fn live_config() -> Option<SearchConfig> {
    let ticketmaster = std::env::var("TICKETMASTER_API_KEY").ok();
    let eventbrite = std::env::var("EVENTBRITE_TOKEN").ok();
    let seatgeek = std::env::var("SEATGEEK_CLIENT_ID").ok();
    if ticketmaster.is_none() && eventbrite.is_none() && seatgeek.is_none() {
        return None;
    }
    Some(SearchConfig {
        api_keys: conf_search::ProviderKeys {
            ticketmaster,
            eventbrite,
            seatgeek,
        },
        ..Default::default()
    })
}

#[tokio::test]
#[ignore]
async fn live_search_returns_sorted_results() {
    let Some(config) = live_config() else {
        eprintln!("no provider credentials set; skipping");
        return;
    };
    let filters = SearchFilters {
        subjects: vec![Subject::Technology],
        location: "New York, NY".into(),
        radius_miles: Some(100.0),
        ..Default::default()
    };

    match conf_search::search(&filters, &config).await {
        Ok(results) => {
            for pair in results.windows(2) {
                assert!(
                    pair[0].start_date <= pair[1].start_date,
                    "results not sorted by start date"
                );
            }
            for record in &results {
                assert!(!record.title.is_empty());
            }
        }
        Err(e) => {
            // Network failures are acceptable in CI; just log.
            eprintln!("live search failed (acceptable in CI): {e}");
        }
    }
}

#[tokio::test]
#[ignore]
async fn live_search_dedup_produces_unique_keys() {
    let Some(config) = live_config() else {
        eprintln!("no provider credentials set; skipping");
        return;
    };
    let filters = SearchFilters::default();

    match conf_search::search(&filters, &config).await {
        Ok(results) => {
            let keys: std::collections::HashSet<String> = results
                .iter()
                .map(|r| format!("{}|{}", r.title.to_lowercase(), r.start_date))
                .collect();
            assert_eq!(
                keys.len(),
                results.len(),
                "results should be unique by title+date after dedup"
            );
        }
        Err(e) => {
            eprintln!("dedup live test failed (acceptable): {e}");
        }
    }
}
