//! Geographic support: city-name geocoding, great-circle distance, and the
//! approximate text-matching tier.
//!
//! The city table is an immutable lookup covering a fixed list of named
//! major cities, not a general geocoder. It is injected through
//! [`crate::config::SearchConfig`] so tests can swap it out without
//! touching pipeline logic. A lookup miss is not an error; it downgrades
//! location filtering to text matching.

use std::collections::HashMap;

use crate::types::Coordinates;

/// Mean Earth radius in miles, as used by the distance formula.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Built-in city coordinates, keyed by city name.
const BUILT_IN_CITIES: &[(&str, f64, f64)] = &[
    ("san francisco", 37.7749, -122.4194),
    ("los angeles", 34.0522, -118.2437),
    ("san diego", 32.7157, -117.1611),
    ("san jose", 37.3382, -121.8863),
    ("seattle", 47.6062, -122.3321),
    ("portland", 45.5152, -122.6784),
    ("denver", 39.7392, -104.9903),
    ("phoenix", 33.4484, -112.0740),
    ("las vegas", 36.1699, -115.1398),
    ("austin", 30.2672, -97.7431),
    ("dallas", 32.7767, -96.7970),
    ("houston", 29.7604, -95.3698),
    ("chicago", 41.8781, -87.6298),
    ("minneapolis", 44.9778, -93.2650),
    ("detroit", 42.3314, -83.0458),
    ("atlanta", 33.7490, -84.3880),
    ("miami", 25.7617, -80.1918),
    ("orlando", 28.5383, -81.3792),
    ("nashville", 36.1627, -86.7816),
    ("new orleans", 29.9511, -90.0715),
    ("new york", 40.7128, -74.0060),
    ("boston", 42.3601, -71.0589),
    ("philadelphia", 39.9526, -75.1652),
    ("washington", 38.9072, -77.0369),
    ("baltimore", 39.2904, -76.6122),
    ("pittsburgh", 40.4406, -79.9959),
    ("london", 51.5074, -0.1278),
    ("paris", 48.8566, 2.3522),
    ("berlin", 52.5200, 13.4050),
    ("amsterdam", 52.3676, 4.9041),
    ("barcelona", 41.3874, 2.1686),
    ("dublin", 53.3498, -6.2603),
    ("toronto", 43.6532, -79.3832),
    ("vancouver", 49.2827, -123.1207),
    ("sydney", -33.8688, 151.2093),
    ("singapore", 1.3521, 103.8198),
    ("tokyo", 35.6762, 139.6503),
    ("dubai", 25.2048, 55.2708),
];

/// Immutable city-name → coordinates lookup table.
#[derive(Debug, Clone)]
pub struct CityIndex {
    cities: HashMap<String, Coordinates>,
}

impl Default for CityIndex {
    /// Builds the index over the built-in major-city table.
    fn default() -> Self {
        let cities = BUILT_IN_CITIES
            .iter()
            .map(|&(name, latitude, longitude)| {
                (
                    name.to_string(),
                    Coordinates {
                        latitude,
                        longitude,
                    },
                )
            })
            .collect();
        Self { cities }
    }
}

impl CityIndex {
    /// Build an index from custom entries. Keys are lowercased so lookups
    /// behave the same as with the built-in table.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Coordinates)>,
    {
        let cities = entries
            .into_iter()
            .map(|(name, coords)| (name.to_lowercase(), coords))
            .collect();
        Self { cities }
    }

    /// An index with no entries: every resolution misses, forcing the
    /// text-matching tier. Useful in tests.
    pub fn empty() -> Self {
        Self {
            cities: HashMap::new(),
        }
    }

    /// Resolve a free-text location ("Boston, MA", "boston") to
    /// coordinates. The lookup key is the substring before the first
    /// comma, trimmed and lowercased. Returns `None` on a miss.
    pub fn resolve(&self, location: &str) -> Option<Coordinates> {
        let key = city_prefix(location).to_lowercase();
        self.cities.get(&key).copied()
    }

    /// Number of cities in the index.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the index holds no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// The city portion of a free-text location: everything before the first
/// comma, trimmed.
pub fn city_prefix(location: &str) -> &str {
    location
        .split(',')
        .next()
        .unwrap_or(location)
        .trim()
}

/// Great-circle distance between two coordinate pairs, in miles, via the
/// Haversine formula:
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// distance = 2·R·atan2(√a, √(1−a))
/// ```
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Approximate location comparison: bidirectional substring containment on
/// lowercased, trimmed input. Either side containing the other counts as a
/// match. Short city names can produce false positives ("York" matches
/// "New York"); inherited behavior, kept as-is.
pub fn text_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    a.contains(&b) || b.contains(&a)
}
