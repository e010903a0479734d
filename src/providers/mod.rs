//! Provider adapter implementations.
//!
//! Each module provides a struct implementing
//! [`crate::provider::EventProviderTrait`] that queries one provider's
//! JSON API and transforms its response shape into canonical
//! [`crate::types::Conference`] records.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

pub mod eventbrite;
pub mod seatgeek;
pub mod ticketmaster;

pub use eventbrite::EventbriteProvider;
pub use seatgeek::SeatGeekProvider;
pub use ticketmaster::TicketmasterProvider;

/// Synthesize a record id for sources that omit one, hashed from title,
/// city, and start date. Ids only need to be unique per source record for
/// the lifetime of one search.
pub(crate) fn synthesize_id(title: &str, city: &str, start_date: NaiveDate) -> String {
    let mut hasher = DefaultHasher::new();
    title.hash(&mut hasher);
    city.hash(&mut hasher);
    start_date.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Parse the date half of a provider's local datetime string
/// ("2024-06-15T19:00:00" or a bare "2024-06-15").
pub(crate) fn local_date(value: &str) -> Option<NaiveDate> {
    value.get(..10)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid test date")
    }

    #[test]
    fn synthesized_ids_are_stable() {
        let a = synthesize_id("Tech Summit", "Austin", date("2025-06-15"));
        let b = synthesize_id("Tech Summit", "Austin", date("2025-06-15"));
        assert_eq!(a, b);
    }

    #[test]
    fn synthesized_ids_differ_across_inputs() {
        let a = synthesize_id("Tech Summit", "Austin", date("2025-06-15"));
        let b = synthesize_id("Tech Summit", "Dallas", date("2025-06-15"));
        let c = synthesize_id("Tech Summit", "Austin", date("2025-06-16"));
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn local_date_accepts_datetime_and_bare_date() {
        assert_eq!(local_date("2024-06-15T19:00:00"), Some(date("2024-06-15")));
        assert_eq!(local_date("2024-06-15"), Some(date("2024-06-15")));
    }

    #[test]
    fn local_date_rejects_garbage() {
        assert!(local_date("not a date").is_none());
        assert!(local_date("2024").is_none());
        assert!(local_date("").is_none());
    }
}
