use std::collections::BTreeMap;

use inventory_core_api::FieldValue;

use crate::models::audit::field_change::{FieldChange, RecordDiff};

/// Structurally diff two attribute maps.
///
/// Every attribute present in `new` is compared against `old`; an attribute
/// absent from `old` records a change with `from: None`. Attributes present
/// only in `old` are not captured.
pub fn diff_fields(
    old: &BTreeMap<String, FieldValue>,
    new: &BTreeMap<String, FieldValue>,
) -> RecordDiff {
    let mut changes = BTreeMap::new();
    for (name, new_value) in new {
        let old_value = old.get(name);
        if old_value != Some(new_value) {
            changes.insert(
                name.clone(),
                FieldChange {
                    from: old_value.cloned(),
                    to: Some(new_value.clone()),
                },
            );
        }
    }
    if changes.is_empty() {
        RecordDiff::Unchanged
    } else {
        RecordDiff::Changed(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, FieldValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
            .collect()
    }

    #[test]
    fn unchanged_maps_yield_unchanged() {
        let old = fields(&[("a", "1"), ("b", "2")]);
        assert!(diff_fields(&old, &old.clone()).is_unchanged());
    }

    #[test]
    fn only_differing_fields_are_recorded() {
        let old = fields(&[("a", "1"), ("b", "2")]);
        let new = fields(&[("a", "1"), ("b", "3")]);
        let changes = diff_fields(&old, &new).into_changes().unwrap();
        assert_eq!(changes.len(), 1);
        let change = &changes["b"];
        assert_eq!(change.from, Some(FieldValue::from("2")));
        assert_eq!(change.to, Some(FieldValue::from("3")));
        assert!(!changes.contains_key("a"));
    }

    #[test]
    fn attribute_new_to_the_record_has_no_from() {
        let old = fields(&[("a", "1")]);
        let new = fields(&[("a", "1"), ("notes", "repaired")]);
        let changes = diff_fields(&old, &new).into_changes().unwrap();
        assert_eq!(changes["notes"].from, None);
        assert_eq!(changes["notes"].to, Some(FieldValue::from("repaired")));
    }

    #[test]
    fn attributes_removed_from_the_record_are_not_captured() {
        let old = fields(&[("a", "1"), ("notes", "old note")]);
        let new = fields(&[("a", "1")]);
        assert!(diff_fields(&old, &new).is_unchanged());
    }
}
