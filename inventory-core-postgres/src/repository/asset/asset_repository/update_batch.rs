use async_trait::async_trait;
use inventory_core_db::models::asset::AssetRecord;
use inventory_core_db::repository::update_batch::UpdateBatch;
use inventory_core_db::utils::hash_as_i64;
use sqlx::types::Json;
use sqlx::{Postgres, Transaction};

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    pub(super) async fn update_batch_impl(
        repo: &AssetRepositoryImpl,
        items: Vec<AssetRecord>,
    ) -> Result<Vec<AssetRecord>, Box<dyn std::error::Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = repo.pool.begin().await?;
        for item in &items {
            Self::update_in_tx(&mut tx, item).await?;
        }
        tx.commit().await?;

        Ok(items)
    }

    /// Full-document replacement reused by the import batch commit.
    pub(crate) async fn update_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        item: &AssetRecord,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let key_hash = hash_as_i64(&item.natural_key)?;
        let result = sqlx::query(
            r#"
            UPDATE assets
            SET natural_key = $2, natural_key_hash = $3, fields = $4, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(&item.natural_key)
        .bind(key_hash)
        .bind(Json(&item.fields))
        .execute(&mut **tx)
        .await?;
        if result.rows_affected() == 0 {
            return Err(format!("no asset with id {} to update", item.id).into());
        }
        Ok(())
    }
}

#[async_trait]
impl UpdateBatch<Postgres, AssetRecord> for AssetRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<AssetRecord>,
    ) -> Result<Vec<AssetRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
