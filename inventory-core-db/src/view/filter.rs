use std::collections::BTreeMap;

use inventory_core_api::{FilterRule, RecordSchema};

use crate::models::asset::AssetRecord;

/// Field-filter stage: every filter with a non-empty value must match.
///
/// A record lacking a filtered attribute is excluded. Filter keys with no
/// schema descriptor fall back to substring matching.
pub(crate) fn matches_filters(
    schema: &RecordSchema,
    record: &AssetRecord,
    filters: &BTreeMap<String, String>,
) -> bool {
    filters.iter().all(|(name, expected)| {
        if expected.is_empty() {
            return true;
        }
        let Some(value) = record.field(name) else {
            return false;
        };
        let value = value.string_form().to_lowercase();
        let expected = expected.to_lowercase();
        let rule = schema
            .field(name)
            .map(|f| f.filter)
            .unwrap_or(FilterRule::Contains);
        match rule {
            FilterRule::Exact => value == expected,
            FilterRule::Contains => value.contains(&expected),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core_api::AssetDraft;

    fn asset(tag: &str, status: &str, location: &str) -> AssetRecord {
        let schema = RecordSchema::it_assets();
        let draft = AssetDraft::new()
            .set("serviceTag", tag)
            .set("model", "OptiPlex")
            .set("status", status)
            .set("location", location);
        AssetRecord::from_draft(&schema, &draft).unwrap()
    }

    fn filters(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_filter_values_impose_no_constraint() {
        let schema = RecordSchema::it_assets();
        let record = asset("SVC-1", "Deployed", "Lab 2");
        assert!(matches_filters(&schema, &record, &filters(&[("status", "")])));
    }

    #[test]
    fn categorical_fields_match_exactly() {
        let schema = RecordSchema::it_assets();
        let record = asset("SVC-1", "Deployed", "Lab 2");
        assert!(matches_filters(&schema, &record, &filters(&[("status", "deployed")])));
        // "Deploy" is a prefix, not an exact status
        assert!(!matches_filters(&schema, &record, &filters(&[("status", "deploy")])));
    }

    #[test]
    fn other_fields_match_by_substring() {
        let schema = RecordSchema::it_assets();
        let record = asset("SVC-1", "Deployed", "Lab 2");
        assert!(matches_filters(&schema, &record, &filters(&[("location", "lab")])));
        assert!(!matches_filters(&schema, &record, &filters(&[("location", "closet")])));
    }

    #[test]
    fn records_lacking_a_filtered_attribute_are_excluded() {
        let schema = RecordSchema::it_assets();
        let record = {
            let draft = AssetDraft::new().set("serviceTag", "SVC-1").set("model", "OptiPlex");
            AssetRecord::from_draft(&schema, &draft).unwrap()
        };
        assert!(!matches_filters(&schema, &record, &filters(&[("status", "Deployed")])));
    }

    #[test]
    fn all_filters_must_match() {
        let schema = RecordSchema::it_assets();
        let record = asset("SVC-1", "Deployed", "Lab 2");
        assert!(matches_filters(
            &schema,
            &record,
            &filters(&[("status", "Deployed"), ("location", "lab")])
        ));
        assert!(!matches_filters(
            &schema,
            &record,
            &filters(&[("status", "Deployed"), ("location", "closet")])
        ));
    }
}
