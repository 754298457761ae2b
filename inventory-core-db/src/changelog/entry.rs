use chrono::{DateTime, Utc};
use inventory_core_api::Attribution;
use uuid::Uuid;

use crate::changelog::differ::diff_fields;
use crate::models::asset::AssetRecord;
use crate::models::audit::action_type::ActionType;
use crate::models::audit::change_log::ChangeLogModel;

/// Record state accompanying a change-log entry.
#[derive(Debug, Clone, Copy)]
pub enum LogPayload<'a> {
    /// The record as created (add) or as it was before removal (delete).
    Snapshot(&'a AssetRecord),
    /// Before/after states of an edit.
    Edit {
        old: &'a AssetRecord,
        new: &'a AssetRecord,
    },
}

/// Assemble a change-log entry for a completed mutation.
///
/// The display name falls back natural key → `name` attribute → "Unknown";
/// for edits the new record's key is preferred, then the old record's.
/// Only edit payloads carry a changes map, and only when at least one field
/// differs. This never fails: unusable payloads degrade to an entry without
/// changes.
pub fn build_entry(
    action_type: ActionType,
    payload: LogPayload<'_>,
    attribution: &Attribution,
    recorded_at: DateTime<Utc>,
) -> ChangeLogModel {
    let asset_name = match payload {
        LogPayload::Snapshot(record) => display_label(record),
        LogPayload::Edit { old, new } => display_label(new).or_else(|| display_label(old)),
    }
    .unwrap_or_else(|| "Unknown".to_string());

    let changes = match payload {
        LogPayload::Edit { old, new } => diff_fields(&old.fields, &new.fields).into_changes(),
        LogPayload::Snapshot(_) => None,
    };

    ChangeLogModel {
        id: Uuid::new_v4(),
        action_type,
        asset_name: ChangeLogModel::bounded_name(&asset_name),
        attribution: attribution.to_string(),
        recorded_at,
        changes,
    }
}

fn display_label(record: &AssetRecord) -> Option<String> {
    if !record.natural_key.is_empty() {
        return Some(record.natural_key.clone());
    }
    let name = record.field_str("name");
    if name.trim().is_empty() {
        None
    } else {
        Some(name)
    }
}
