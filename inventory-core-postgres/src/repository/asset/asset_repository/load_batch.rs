use async_trait::async_trait;
use inventory_core_db::models::asset::AssetRecord;
use inventory_core_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::AssetRepositoryImpl;
use super::row::record_from_row;

impl AssetRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &AssetRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AssetRecord>>, Box<dyn std::error::Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT id, natural_key, fields
            FROM assets
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&*repo.pool)
        .await?;

        let mut by_id = std::collections::HashMap::with_capacity(rows.len());
        for row in &rows {
            let record = record_from_row(row)?;
            by_id.insert(record.id, record);
        }

        Ok(ids.iter().map(|id| by_id.remove(id)).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, AssetRecord> for AssetRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AssetRecord>>, Box<dyn std::error::Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
