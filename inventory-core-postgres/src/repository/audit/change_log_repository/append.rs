use async_trait::async_trait;
use inventory_core_db::models::audit::ChangeLogModel;
use inventory_core_db::repository::append_log::AppendLog;
use sqlx::types::Json;
use sqlx::{Postgres, Transaction};

use super::repo_impl::ChangeLogRepositoryImpl;

impl ChangeLogRepositoryImpl {
    async fn append_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        entry: &ChangeLogModel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO asset_logs (id, action_type, asset_name, attribution, recorded_at, changes)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id)
        .bind(entry.action_type)
        .bind(entry.asset_name.as_str())
        .bind(&entry.attribution)
        .bind(entry.recorded_at)
        .bind(entry.changes.as_ref().map(Json))
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl AppendLog<Postgres, ChangeLogModel> for ChangeLogRepositoryImpl {
    async fn append(
        &self,
        entry: ChangeLogModel,
    ) -> Result<ChangeLogModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = self.append_batch(vec![entry]).await?;
        Ok(entries.remove(0))
    }

    async fn append_batch(
        &self,
        entries: Vec<ChangeLogModel>,
    ) -> Result<Vec<ChangeLogModel>, Box<dyn std::error::Error + Send + Sync>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for entry in &entries {
            Self::append_in_tx(&mut tx, entry).await?;
        }
        tx.commit().await?;

        Ok(entries)
    }
}
