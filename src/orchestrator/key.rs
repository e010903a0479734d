//! Dedup key derivation for conference records.
//!
//! The same real-world event frequently comes back from more than one
//! provider with cosmetic title differences. Keys canonicalise those so
//! equal events compare as equal: normalized title joined with the ISO
//! start date. Exact key equality only, with no fuzzy matching and no
//! cross-date tolerance. The city is deliberately not part of the key.

use crate::types::Conference;

/// Separator between the title and date halves of a key. Not expected to
/// occur in event titles.
const KEY_SEPARATOR: char = '|';

/// Normalize a title for keying: lowercase, trim, and collapse internal
/// whitespace runs to single spaces.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the dedup key for a record: normalized title, separator, ISO
/// start date.
pub fn dedup_key(record: &Conference) -> String {
    format!(
        "{}{}{}",
        normalize_title(&record.title),
        KEY_SEPARATOR,
        record.start_date
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Subject};

    fn make_record(title: &str, start_date: &str) -> Conference {
        Conference {
            id: "x".into(),
            title: title.into(),
            subject: Subject::Technology,
            location: Location {
                city: "Denver".into(),
                state: "CO".into(),
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
            source: "Test".into(),
        }
    }

    #[test]
    fn normalize_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_title("  Tech   Summit\t2025 "), "tech summit 2025");
    }

    #[test]
    fn case_and_whitespace_variants_share_a_key() {
        let a = make_record("Tech Summit 2025", "2025-06-15");
        let b = make_record("  TECH  summit   2025", "2025-06-15");
        assert_eq!(dedup_key(&a), dedup_key(&b));
    }

    #[test]
    fn different_dates_produce_different_keys() {
        let a = make_record("Tech Summit 2025", "2025-06-15");
        let b = make_record("Tech Summit 2025", "2025-06-16");
        assert_ne!(dedup_key(&a), dedup_key(&b));
    }

    #[test]
    fn different_cities_share_a_key() {
        let a = make_record("Tech Summit 2025", "2025-06-15");
        let mut b = make_record("Tech Summit 2025", "2025-06-15");
        b.location.city = "Portland".into();
        assert_eq!(dedup_key(&a), dedup_key(&b));
    }

    #[test]
    fn key_contains_iso_date() {
        let record = make_record("Tech Summit 2025", "2025-06-15");
        assert_eq!(dedup_key(&record), "tech summit 2025|2025-06-15");
    }
}
