use std::collections::HashMap;

use chrono::{DateTime, Utc};
use inventory_core_api::{AssetDraft, Attribution, ImportReport, RecordSchema};
use uuid::Uuid;

use crate::changelog::differ::diff_fields;
use crate::changelog::entry::{build_entry, LogPayload};
use crate::models::asset::AssetRecord;
use crate::models::audit::action_type::ActionType;
use crate::models::audit::change_log::ChangeLogModel;

/// An existing record scheduled for full replacement of its mapped
/// attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub old: AssetRecord,
    pub new: AssetRecord,
}

/// Batched write plan produced by reconciling parsed rows against the
/// current record set. Committed as one transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    pub to_insert: Vec<AssetRecord>,
    pub to_update: Vec<RecordUpdate>,
    /// Rows matching an existing record with no differing field.
    pub skipped_unchanged: usize,
    /// Rows rejected by draft validation before reconciliation.
    pub dropped_invalid: usize,
}

impl ImportPlan {
    pub fn inserted_count(&self) -> usize {
        self.to_insert.len()
    }

    pub fn updated_count(&self) -> usize {
        self.to_update.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_insert.is_empty() && self.to_update.is_empty()
    }

    pub fn report(&self) -> ImportReport {
        ImportReport {
            inserted: self.inserted_count(),
            updated: self.updated_count(),
            skipped_unchanged: self.skipped_unchanged,
            dropped_invalid: self.dropped_invalid,
        }
    }
}

enum Pending {
    Insert(usize),
    Update(usize),
}

/// Classify parsed rows as insert / update / unchanged against the
/// existing record set.
///
/// A row is eligible only if it validates against the schema (required
/// columns non-empty after trimming, numbers parseable); ineligible rows
/// are counted, not silently dropped. The trimmed natural key resolves
/// duplicates: an unmatched key inserts a new record, a matched key with at
/// least one differing mapped attribute replaces the existing record's
/// attributes wholesale, and a matched key with no difference is skipped.
/// Rows repeating a key already classified in this run reconcile against
/// the pending row — last one wins within a file — so one plan never
/// schedules two writes for the same key.
pub fn reconcile(
    schema: &RecordSchema,
    rows: &[AssetDraft],
    existing: &[AssetRecord],
) -> ImportPlan {
    let mut plan = ImportPlan::default();

    let existing_by_key: HashMap<&str, &AssetRecord> = existing
        .iter()
        .map(|record| (record.natural_key.as_str(), record))
        .collect();
    let mut pending: HashMap<String, Pending> = HashMap::new();

    for row in rows {
        let fields = match schema.validate_draft(row) {
            Ok(fields) => fields,
            Err(_) => {
                plan.dropped_invalid += 1;
                continue;
            }
        };
        let candidate = AssetRecord::from_fields(schema, Uuid::new_v4(), fields);
        let key = candidate.natural_key.clone();

        if let Some(slot) = pending.get(&key) {
            let current = match slot {
                Pending::Insert(index) => &plan.to_insert[*index],
                Pending::Update(index) => &plan.to_update[*index].new,
            };
            if diff_fields(&current.fields, &candidate.fields).is_unchanged() {
                plan.skipped_unchanged += 1;
                continue;
            }
            let revised = AssetRecord::from_fields(schema, current.id, candidate.fields);
            match slot {
                Pending::Insert(index) => plan.to_insert[*index] = revised,
                Pending::Update(index) => plan.to_update[*index].new = revised,
            }
            continue;
        }

        match existing_by_key.get(key.as_str()) {
            Some(old) => {
                if diff_fields(&old.fields, &candidate.fields).is_unchanged() {
                    plan.skipped_unchanged += 1;
                } else {
                    let new = AssetRecord::from_fields(schema, old.id, candidate.fields);
                    plan.to_update.push(RecordUpdate {
                        old: (*old).clone(),
                        new,
                    });
                    pending.insert(key, Pending::Update(plan.to_update.len() - 1));
                }
            }
            None => {
                plan.to_insert.push(candidate);
                pending.insert(key, Pending::Insert(plan.to_insert.len() - 1));
            }
        }
    }

    plan
}

/// Change-log entries for a plan: one add entry per insert and one edit
/// entry per update, in classification order.
pub fn plan_log_entries(
    plan: &ImportPlan,
    attribution: &Attribution,
    recorded_at: DateTime<Utc>,
) -> Vec<ChangeLogModel> {
    let adds = plan
        .to_insert
        .iter()
        .map(|record| build_entry(ActionType::Add, LogPayload::Snapshot(record), attribution, recorded_at));
    let edits = plan.to_update.iter().map(|update| {
        build_entry(
            ActionType::Edit,
            LogPayload::Edit {
                old: &update.old,
                new: &update.new,
            },
            attribution,
            recorded_at,
        )
    });
    adds.chain(edits).collect()
}
