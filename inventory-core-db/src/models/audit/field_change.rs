use std::collections::BTreeMap;

use inventory_core_api::FieldValue;
use serde::{Deserialize, Serialize};

/// Before/after pair for one attribute of an edited record.
///
/// `from` is absent when the attribute did not exist on the old record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub from: Option<FieldValue>,
    pub to: Option<FieldValue>,
}

/// Outcome of structurally diffing two records.
///
/// A `Changed` map is never empty: a diff with zero differing fields is
/// `Unchanged`, and callers store no changes map at all for it.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordDiff {
    Unchanged,
    Changed(BTreeMap<String, FieldChange>),
}

impl RecordDiff {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, RecordDiff::Unchanged)
    }

    /// The changes map for storage; `None` when nothing differs.
    pub fn into_changes(self) -> Option<BTreeMap<String, FieldChange>> {
        match self {
            RecordDiff::Unchanged => None,
            RecordDiff::Changed(changes) => Some(changes),
        }
    }
}
