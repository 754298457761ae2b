use async_trait::async_trait;
use inventory_core_db::models::asset::AssetRecord;
use inventory_core_db::repository::find_by_natural_key::FindByNaturalKey;
use inventory_core_db::utils::hash_as_i64;
use sqlx::Postgres;

use super::repo_impl::AssetRepositoryImpl;
use super::row::record_from_row;

impl AssetRepositoryImpl {
    pub(super) async fn find_by_natural_key_impl(
        repo: &AssetRepositoryImpl,
        natural_key: &str,
    ) -> Result<Option<AssetRecord>, Box<dyn std::error::Error + Send + Sync>> {
        let key_hash = hash_as_i64(&natural_key)?;
        let rows = sqlx::query(
            r#"
            SELECT id, natural_key, fields
            FROM assets
            WHERE natural_key_hash = $1
            "#,
        )
        .bind(key_hash)
        .fetch_all(&*repo.pool)
        .await?;

        // verify the exact key; the hash index only narrows the scan
        for row in &rows {
            let record = record_from_row(row)?;
            if record.natural_key == natural_key {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl FindByNaturalKey<Postgres, AssetRecord> for AssetRepositoryImpl {
    async fn find_by_natural_key(
        &self,
        natural_key: &str,
    ) -> Result<Option<AssetRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_natural_key_impl(self, natural_key).await
    }
}
