//! JSON export/import for result lists.
//!
//! Callers sometimes want to hand a result set to another tool or replay
//! one in tests. These helpers round-trip a list of canonical records
//! through pretty-printed JSON strings. In-memory only; the crate holds
//! no persistent state.

use crate::error::{Result, SearchError};
use crate::types::Conference;

/// Serialize records to a pretty-printed JSON array.
pub fn export_json(records: &[Conference]) -> Result<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| SearchError::Parse(format!("export failed: {e}")))
}

/// Parse records from a JSON array produced by [`export_json`] (or any
/// source emitting the canonical shape).
pub fn import_json(json: &str) -> Result<Vec<Conference>> {
    serde_json::from_str(json).map_err(|e| SearchError::Parse(format!("import failed: {e}")))
}
