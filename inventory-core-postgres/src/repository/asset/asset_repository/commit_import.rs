use inventory_core_db::import::reconciler::ImportPlan;

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    /// Commit an import plan — all inserts and all updates of one run — as
    /// a single transaction. All-or-nothing: a failed commit applies no row.
    pub async fn commit_import(
        &self,
        plan: &ImportPlan,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if plan.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for item in &plan.to_insert {
            Self::insert_in_tx(&mut tx, item).await?;
        }
        for update in &plan.to_update {
            Self::update_in_tx(&mut tx, &update.new).await?;
        }
        tx.commit().await?;

        Ok(())
    }
}
