use std::collections::BTreeMap;
use std::sync::Arc;

use inventory_core_db::models::audit::{ActionType, ChangeLogModel, FieldChange};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Postgres-backed repository for the append-only "asset_logs" collection.
pub struct ChangeLogRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ChangeLogRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub(super) fn entry_from_row(
        row: &PgRow,
    ) -> Result<ChangeLogModel, Box<dyn std::error::Error + Send + Sync>> {
        let id: Uuid = row.try_get("id")?;
        let action_type: ActionType = row.try_get("action_type")?;
        let asset_name: String = row.try_get("asset_name")?;
        let attribution: String = row.try_get("attribution")?;
        let recorded_at = row.try_get("recorded_at")?;
        let changes: Option<Json<BTreeMap<String, FieldChange>>> = row.try_get("changes")?;
        Ok(ChangeLogModel {
            id,
            action_type,
            asset_name: ChangeLogModel::bounded_name(&asset_name),
            attribution,
            recorded_at,
            changes: changes.map(|Json(changes)| changes),
        })
    }
}
