use async_trait::async_trait;
use inventory_core_db::models::audit::ChangeLogModel;
use inventory_core_db::repository::load_log_page::LoadLogPage;
use inventory_core_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, Row};

use super::repo_impl::ChangeLogRepositoryImpl;

impl ChangeLogRepositoryImpl {
    pub(super) async fn load_page_impl(
        repo: &ChangeLogRepositoryImpl,
        page: PageRequest,
    ) -> Result<Page<ChangeLogModel>, Box<dyn std::error::Error + Send + Sync>> {
        let total: i64 = sqlx::query(r#"SELECT COUNT(*) AS total FROM asset_logs"#)
            .fetch_one(&*repo.pool)
            .await?
            .try_get("total")?;

        let rows = sqlx::query(
            r#"
            SELECT id, action_type, asset_name, attribution, recorded_at, changes
            FROM asset_logs
            ORDER BY recorded_at DESC, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&*repo.pool)
        .await?;

        let items = rows
            .iter()
            .map(Self::entry_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[async_trait]
impl LoadLogPage<Postgres, ChangeLogModel> for ChangeLogRepositoryImpl {
    async fn load_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<ChangeLogModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::load_page_impl(self, page).await
    }
}
