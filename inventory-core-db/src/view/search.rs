use inventory_core_api::RecordSchema;
use serde::{Deserialize, Serialize};

use crate::models::asset::AssetRecord;

/// How free-text search decides which records to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchMode {
    /// Keep records where the query is a substring of any attribute.
    #[default]
    Substring,
    /// Score each attribute (exact 3, prefix 2, substring 1), keep records
    /// scoring above zero and order them by descending score.
    Relevance,
}

/// Substring membership across all schema attributes, case-insensitive.
/// `query_lower` must already be lowercased.
pub(crate) fn matches_substring(
    schema: &RecordSchema,
    record: &AssetRecord,
    query_lower: &str,
) -> bool {
    schema.fields().iter().any(|field| {
        record
            .field_str(&field.name)
            .to_lowercase()
            .contains(query_lower)
    })
}

/// Summed relevance score across all schema attributes; zero means the
/// record is dropped from the view.
pub(crate) fn relevance_score(
    schema: &RecordSchema,
    record: &AssetRecord,
    query_lower: &str,
) -> u32 {
    schema
        .fields()
        .iter()
        .map(|field| {
            let value = record.field_str(&field.name).to_lowercase();
            if value.is_empty() {
                0
            } else if value == query_lower {
                3
            } else if value.starts_with(query_lower) {
                2
            } else if value.contains(query_lower) {
                1
            } else {
                0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core_api::AssetDraft;

    fn asset(tag: &str, model: &str) -> AssetRecord {
        let schema = RecordSchema::it_assets();
        let draft = AssetDraft::new().set("serviceTag", tag).set("model", model);
        AssetRecord::from_draft(&schema, &draft).unwrap()
    }

    #[test]
    fn substring_matches_any_attribute() {
        let schema = RecordSchema::it_assets();
        let record = asset("SVC-42", "Latitude 5520");
        assert!(matches_substring(&schema, &record, "latitude"));
        assert!(matches_substring(&schema, &record, "c-42"));
        assert!(!matches_substring(&schema, &record, "precision"));
    }

    #[test]
    fn exact_match_outscores_prefix_and_substring() {
        let schema = RecordSchema::it_assets();
        let exact = asset("pn-1", "m");
        let prefix = asset("pn-10", "m");
        let inner = asset("xpn-1x", "m");
        let exact_score = relevance_score(&schema, &exact, "pn-1");
        let prefix_score = relevance_score(&schema, &prefix, "pn-1");
        let inner_score = relevance_score(&schema, &inner, "pn-1");
        assert!(exact_score > prefix_score);
        assert!(prefix_score > inner_score);
        assert!(inner_score > 0);
    }

    #[test]
    fn scores_sum_across_attributes() {
        let schema = RecordSchema::it_assets();
        let record = asset("dock", "dock");
        // two exact matches
        assert_eq!(relevance_score(&schema, &record, "dock"), 6);
    }
}
