//! Record deduplication by normalized title + start date.
//!
//! Groups records that refer to the same real-world event (same dedup
//! key) and keeps exactly one per key: the one with the higher
//! completeness score, first-seen winning ties. Output preserves the
//! first-insertion order of surviving keys; no re-sort happens here.

use std::collections::HashMap;

use crate::types::Conference;

use super::completeness::completeness_score;
use super::key::dedup_key;

/// Deduplicate records by dedup key.
///
/// On a key collision the stored and incoming records are compared by
/// [`completeness_score`]; the incoming record replaces the stored one
/// only when its score is strictly higher. A replacement keeps the
/// original insertion position.
pub fn deduplicate(records: Vec<Conference>) -> Vec<Conference> {
    // Map from dedup key → position of the surviving record in `kept`.
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<Conference> = Vec::new();

    for record in records {
        let key = dedup_key(&record);
        match positions.get(&key) {
            Some(&pos) => {
                if completeness_score(&record) > completeness_score(&kept[pos]) {
                    kept[pos] = record;
                }
            }
            None => {
                positions.insert(key, kept.len());
                kept.push(record);
            }
        }
    }

    kept
}
