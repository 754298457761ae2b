use async_trait::async_trait;
use inventory_core_db::models::asset::AssetRecord;
use inventory_core_db::repository::create_batch::CreateBatch;
use inventory_core_db::utils::hash_as_i64;
use sqlx::types::Json;
use sqlx::{Postgres, Transaction};

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &AssetRepositoryImpl,
        items: Vec<AssetRecord>,
    ) -> Result<Vec<AssetRecord>, Box<dyn std::error::Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = repo.pool.begin().await?;
        for item in &items {
            Self::insert_in_tx(&mut tx, item).await?;
        }
        tx.commit().await?;

        Ok(items)
    }

    /// Single-record insert reused by the import batch commit.
    pub(crate) async fn insert_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        item: &AssetRecord,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let key_hash = hash_as_i64(&item.natural_key)?;
        sqlx::query(
            r#"
            INSERT INTO assets (id, natural_key, natural_key_hash, fields)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id)
        .bind(&item.natural_key)
        .bind(key_hash)
        .bind(Json(&item.fields))
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CreateBatch<Postgres, AssetRecord> for AssetRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<AssetRecord>,
    ) -> Result<Vec<AssetRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use inventory_core_db::repository::create_batch::CreateBatch;
    use super::super::test_utils::test_utils::new_test_asset;

    #[tokio::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.asset_repos().asset_repository;

        let mut assets = Vec::new();
        for _ in 0..5 {
            assets.push(new_test_asset());
        }

        let saved = asset_repo.create_batch(assets.clone()).await?;
        assert_eq!(saved.len(), 5);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn test_create_batch_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.asset_repos().asset_repository;

        let saved = asset_repo.create_batch(Vec::new()).await?;
        assert_eq!(saved.len(), 0);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn test_duplicate_natural_key_is_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.asset_repos().asset_repository;

        let asset = new_test_asset();
        let mut duplicate = new_test_asset();
        duplicate.natural_key = asset.natural_key.clone();

        asset_repo.create_batch(vec![asset]).await?;
        let result = asset_repo.create_batch(vec![duplicate]).await;
        assert!(result.is_err());

        Ok(())
    }
}
