use serde::{Deserialize, Serialize};

/// Outcome of one CSV import run.
///
/// Invalid rows are counted rather than silently dropped so the caller can
/// tell the user how much of the file was actually applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Rows written as new records.
    pub inserted: usize,
    /// Rows that replaced an existing record with at least one changed field.
    pub updated: usize,
    /// Rows matching an existing record with no differing field.
    pub skipped_unchanged: usize,
    /// Rows rejected before reconciliation (missing or malformed columns).
    pub dropped_invalid: usize,
}
