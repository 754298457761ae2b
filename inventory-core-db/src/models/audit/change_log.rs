use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::audit::action_type::ActionType;
use crate::models::audit::field_change::FieldChange;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// - One entry in the "assetLogs" collection per successful store mutation.
/// - Entries are append-only: never mutated or deleted after creation.
/// - `changes` is present only for edit actions with at least one differing
///   field; an edit that changed nothing records no entry at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeLogModel {
    pub id: Uuid,

    pub action_type: ActionType,

    /// Display-label snapshot of the affected record at mutation time.
    pub asset_name: HeaplessString<100>,

    /// String snapshot of the acting user ("Unknown" without a session).
    pub attribution: String,

    pub recorded_at: DateTime<Utc>,

    /// Field-level diff; non-empty whenever present.
    pub changes: Option<BTreeMap<String, FieldChange>>,
}

impl ChangeLogModel {
    /// Bound a display label to the stored width, truncating on a char
    /// boundary.
    pub fn bounded_name(value: &str) -> HeaplessString<100> {
        let mut label = HeaplessString::new();
        for ch in value.chars() {
            if label.push(ch).is_err() {
                break;
            }
        }
        label
    }
}

impl Identifiable for ChangeLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_name_truncates_long_labels() {
        let long = "x".repeat(240);
        assert_eq!(ChangeLogModel::bounded_name(&long).len(), 100);
        assert_eq!(ChangeLogModel::bounded_name("SVC-1").as_str(), "SVC-1");
    }
}
