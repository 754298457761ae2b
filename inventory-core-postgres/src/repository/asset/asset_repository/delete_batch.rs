use async_trait::async_trait;
use inventory_core_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &AssetRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = repo.pool.begin().await?;
        let result = sqlx::query(
            r#"
            DELETE FROM assets
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for AssetRepositoryImpl {
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use inventory_core_db::repository::create_batch::CreateBatch;
    use inventory_core_db::repository::delete_batch::DeleteBatch;
    use inventory_core_db::repository::exist_by_ids::ExistByIds;
    use super::super::test_utils::test_utils::new_test_asset;

    #[tokio::test]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn test_delete_batch_counts_deleted_rows() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.asset_repos().asset_repository;

        let asset = new_test_asset();
        asset_repo.create_batch(vec![asset.clone()]).await?;

        let deleted = asset_repo.delete_batch(&[asset.id]).await?;
        assert_eq!(deleted, 1);

        let existence = asset_repo.exist_by_ids(&[asset.id]).await?;
        assert_eq!(existence, vec![(asset.id, false)]);

        Ok(())
    }
}
