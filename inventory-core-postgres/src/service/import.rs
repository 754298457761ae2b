use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use inventory_core_api::{
    ApiResult, Attribution, ImportReport, ImportService, RecordSchema, Session,
};
use inventory_core_db::import::csv;
use inventory_core_db::import::reconciler::{plan_log_entries, reconcile};
use inventory_core_db::repository::load_all::LoadAll;

use crate::repository::asset::asset_repository::AssetRepositoryImpl;
use crate::service::change_logger::ChangeLogger;
use crate::service::db_error;

/// Bulk CSV import: parse, reconcile against the current record set, then
/// commit every resulting write as one transaction.
pub struct CsvImportService {
    schema: RecordSchema,
    assets: Arc<AssetRepositoryImpl>,
    logger: ChangeLogger,
}

impl CsvImportService {
    pub fn new(schema: RecordSchema, assets: Arc<AssetRepositoryImpl>, logger: ChangeLogger) -> Self {
        Self {
            schema,
            assets,
            logger,
        }
    }

    /// Downloadable template with just the header row.
    pub fn template(&self) -> ApiResult<String> {
        csv::template(&self.schema)
    }
}

#[async_trait]
impl ImportService for CsvImportService {
    async fn import_csv(
        &self,
        csv_text: &str,
        session: Option<&Session>,
    ) -> ApiResult<ImportReport> {
        let rows = csv::parse_rows(&self.schema, csv_text)?;
        let existing = self.assets.load_all().await.map_err(db_error)?;
        let plan = reconcile(&self.schema, &rows, &existing);

        // one entry per classified row, recorded at classification time,
        // before the batch commits; the logger is best-effort either way
        let attribution = Attribution::from_session(session);
        let entries = plan_log_entries(&plan, &attribution, Utc::now());
        self.logger.log_entries(entries).await;

        self.assets.commit_import(&plan).await.map_err(db_error)?;
        Ok(plan.report())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_parts_services;
    use inventory_core_api::{AssetDraft, ImportService};
    use inventory_core_db::models::audit::ActionType;
    use inventory_core_db::repository::load_log_page::LoadLogPage;
    use inventory_core_db::repository::pagination::PageRequest;
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[serial]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn test_three_row_import_end_to_end() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (services, ctx) = setup_test_parts_services().await?;
        let run = Uuid::new_v4().simple().to_string();
        let (pn_new, pn_same, pn_changed) = (
            format!("PN-{run}-1"),
            format!("PN-{run}-2"),
            format!("PN-{run}-3"),
        );

        // seed the two existing records through the command service
        let seed = |part: &str, quantity: &str| {
            AssetDraft::new()
                .set("partNumber", part)
                .set("category", "Bolts")
                .set("description", "Hex bolt")
                .set("quantity", quantity)
                .set("price", "1.25")
                .set("retail", "2.50")
        };
        use inventory_core_api::AssetCommandService;
        services.asset_command.add_asset(seed(&pn_same, "4"), None).await?;
        services.asset_command.add_asset(seed(&pn_changed, "9"), None).await?;

        let csv_text = format!(
            "Part Number,Category,Description,Quantity,Price,Retail\n\
             {pn_new},Bolts,Hex bolt,10,1.25,2.50\n\
             {pn_same},Bolts,Hex bolt,4,1.25,2.50\n\
             {pn_changed},Bolts,Hex bolt,11,1.25,2.50\n"
        );
        let report = services.import.import_csv(&csv_text, None).await?;
        assert_eq!(report.inserted, 1);
        assert_eq!(report.updated, 1);
        assert_eq!(report.skipped_unchanged, 1);
        assert_eq!(report.dropped_invalid, 0);

        // exactly two import entries: an add for the new part and an edit
        // for the changed one, nothing for the unchanged row
        let page = ctx
            .audit_repos()
            .change_log_repository
            .load_page(PageRequest::new(50, 0))
            .await?;
        let run_entries: Vec<_> = page
            .items
            .iter()
            .filter(|entry| {
                [&pn_new, &pn_same, &pn_changed]
                    .iter()
                    .any(|pn| entry.asset_name.as_str() == pn.as_str())
            })
            .collect();
        // the two seeding adds plus the two import entries
        assert_eq!(run_entries.len(), 4);
        assert!(run_entries
            .iter()
            .any(|e| e.action_type == ActionType::Add && e.asset_name.as_str() == pn_new));
        assert!(run_entries
            .iter()
            .any(|e| e.action_type == ActionType::Edit && e.asset_name.as_str() == pn_changed));
        assert!(!run_entries
            .iter()
            .any(|e| e.action_type == ActionType::Edit && e.asset_name.as_str() == pn_same));

        Ok(())
    }
}
