use async_trait::async_trait;
use inventory_core_db::models::asset::AssetRecord;
use inventory_core_db::repository::load_all::LoadAll;
use sqlx::Postgres;

use super::repo_impl::AssetRepositoryImpl;
use super::row::record_from_row;

impl AssetRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &AssetRepositoryImpl,
    ) -> Result<Vec<AssetRecord>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT id, natural_key, fields
            FROM assets
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }
}

#[async_trait]
impl LoadAll<Postgres, AssetRecord> for AssetRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<AssetRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
