use std::collections::HashSet;

use async_trait::async_trait;
use inventory_core_db::repository::exist_by_ids::ExistByIds;
use sqlx::{Postgres, Row};
use uuid::Uuid;

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    pub(super) async fn exist_by_ids_impl(
        repo: &AssetRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT id FROM assets WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&*repo.pool)
        .await?;

        let mut found = HashSet::with_capacity(rows.len());
        for row in &rows {
            found.insert(row.try_get::<Uuid, _>("id")?);
        }

        Ok(ids.iter().map(|id| (*id, found.contains(id))).collect())
    }
}

#[async_trait]
impl ExistByIds<Postgres> for AssetRepositoryImpl {
    async fn exist_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>> {
        Self::exist_by_ids_impl(self, ids).await
    }
}
