use std::sync::Arc;

use chrono::Utc;
use inventory_core_api::{Attribution, Session};
use inventory_core_db::changelog::entry::{build_entry, LogPayload};
use inventory_core_db::models::audit::{ActionType, ChangeLogModel};
use inventory_core_db::repository::append_log::AppendLog;

use crate::repository::audit::change_log_repository::ChangeLogRepositoryImpl;

/// Best-effort mirror of store mutations into the audit trail.
///
/// Never propagates failure: a mutation must not fail because its log entry
/// could not be written, so append errors are traced and swallowed.
pub struct ChangeLogger {
    log_repository: Arc<ChangeLogRepositoryImpl>,
}

impl ChangeLogger {
    pub fn new(log_repository: Arc<ChangeLogRepositoryImpl>) -> Self {
        Self { log_repository }
    }

    /// Build and append one entry for a completed mutation, attributed to
    /// the current session at call time.
    pub async fn log_action(
        &self,
        action_type: ActionType,
        payload: LogPayload<'_>,
        session: Option<&Session>,
    ) {
        let attribution = Attribution::from_session(session);
        let entry = build_entry(action_type, payload, &attribution, Utc::now());
        self.log_entries(vec![entry]).await;
    }

    /// Append pre-built entries (used by the import flow).
    pub async fn log_entries(&self, entries: Vec<ChangeLogModel>) {
        if entries.is_empty() {
            return;
        }
        let count = entries.len();
        if let Err(error) = self.log_repository.append_batch(entries).await {
            tracing::error!(count, "failed to append change log entries: {error}");
        }
    }
}
