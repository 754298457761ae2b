use std::collections::BTreeMap;

use inventory_core_api::FieldValue;
use inventory_core_db::models::asset::AssetRecord;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::Row;
use uuid::Uuid;

/// Map one `assets` row back into a record. The JSONB `fields` column holds
/// the schema-described attribute map.
pub(super) fn record_from_row(
    row: &PgRow,
) -> Result<AssetRecord, Box<dyn std::error::Error + Send + Sync>> {
    let id: Uuid = row.try_get("id")?;
    let natural_key: String = row.try_get("natural_key")?;
    let Json(fields): Json<BTreeMap<String, FieldValue>> = row.try_get("fields")?;
    Ok(AssetRecord {
        id,
        natural_key,
        fields,
    })
}
