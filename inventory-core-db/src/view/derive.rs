use std::cmp::Ordering;

use inventory_core_api::RecordSchema;

use crate::models::asset::AssetRecord;
use crate::repository::pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE};
use crate::view::filter::matches_filters;
use crate::view::search::{matches_substring, relevance_score, SearchMode};
use crate::view::sort::compare_natural;
use crate::view::state::{SortDirection, ViewState};

/// Derive the visible, ordered subset of the record set.
///
/// Stages run search → field filters → sort. The pipeline borrows the
/// records and never fails: missing attributes compare as empty strings and
/// malformed state degrades to "no match". With relevance search active,
/// descending score is the primary order and the sort key only breaks ties
/// within equal-score groups; the sort is stable, so an empty sort key
/// preserves the incoming order.
pub fn derive<'a>(
    schema: &RecordSchema,
    records: &'a [AssetRecord],
    state: &ViewState,
) -> Vec<&'a AssetRecord> {
    let query = state.search_query.to_lowercase();
    let scored = state.search_mode == SearchMode::Relevance && !query.is_empty();

    let mut rows: Vec<(&AssetRecord, u32)> = records
        .iter()
        .filter_map(|record| {
            let score = if query.is_empty() {
                0
            } else {
                match state.search_mode {
                    SearchMode::Substring => {
                        if !matches_substring(schema, record, &query) {
                            return None;
                        }
                        0
                    }
                    SearchMode::Relevance => {
                        let score = relevance_score(schema, record, &query);
                        if score == 0 {
                            return None;
                        }
                        score
                    }
                }
            };
            if !matches_filters(schema, record, &state.filters) {
                return None;
            }
            Some((record, score))
        })
        .collect();

    let sort_key = state.sort.key.as_str();
    if scored || !sort_key.is_empty() {
        rows.sort_by(|(record_a, score_a), (record_b, score_b)| {
            if scored {
                match score_b.cmp(score_a) {
                    Ordering::Equal => {}
                    ordering => return ordering,
                }
            }
            if sort_key.is_empty() {
                return Ordering::Equal;
            }
            let ordering =
                compare_natural(&record_a.field_str(sort_key), &record_b.field_str(sort_key));
            match state.sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    rows.into_iter().map(|(record, _)| record).collect()
}

/// Derive and slice out the current page (fixed page size of 10).
pub fn derive_page<'a>(
    schema: &RecordSchema,
    records: &'a [AssetRecord],
    state: &ViewState,
) -> Page<&'a AssetRecord> {
    let visible = derive(schema, records, state);
    let request = PageRequest::for_page(DEFAULT_PAGE_SIZE, state.current_page);
    let total = visible.len();
    let items: Vec<&AssetRecord> = visible
        .into_iter()
        .skip(request.offset)
        .take(request.limit)
        .collect();
    Page::new(items, total, request.limit, request.offset)
}
