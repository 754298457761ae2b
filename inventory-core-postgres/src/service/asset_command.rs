use std::sync::Arc;

use async_trait::async_trait;
use inventory_core_api::{
    ApiError, ApiResult, AssetCommandService, AssetDraft, RecordSchema, Session,
};
use inventory_core_db::changelog::entry::LogPayload;
use inventory_core_db::models::asset::AssetRecord;
use inventory_core_db::models::audit::ActionType;
use inventory_core_db::repository::create_batch::CreateBatch;
use inventory_core_db::repository::delete_batch::DeleteBatch;
use inventory_core_db::repository::find_by_natural_key::FindByNaturalKey;
use inventory_core_db::repository::load_batch::LoadBatch;
use inventory_core_db::repository::update_batch::UpdateBatch;
use uuid::Uuid;

use crate::repository::asset::asset_repository::AssetRepositoryImpl;
use crate::service::change_logger::ChangeLogger;
use crate::service::{db_error, is_unique_violation};

/// Single-record mutations against the asset store, mirrored into the
/// change log after each successful write.
pub struct AssetCommandServiceImpl {
    schema: RecordSchema,
    assets: Arc<AssetRepositoryImpl>,
    logger: ChangeLogger,
}

impl AssetCommandServiceImpl {
    pub fn new(schema: RecordSchema, assets: Arc<AssetRepositoryImpl>, logger: ChangeLogger) -> Self {
        Self {
            schema,
            assets,
            logger,
        }
    }

    async fn load_existing(&self, id: Uuid) -> ApiResult<AssetRecord> {
        self.assets
            .load_batch(&[id])
            .await
            .map_err(db_error)?
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| ApiError::NotFound(format!("asset {id}")))
    }

    async fn reject_duplicate_key(&self, natural_key: &str) -> ApiResult<()> {
        let existing = self
            .assets
            .find_by_natural_key(natural_key)
            .await
            .map_err(db_error)?;
        if existing.is_some() {
            return Err(ApiError::DuplicateKey(natural_key.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AssetCommandService for AssetCommandServiceImpl {
    async fn add_asset(&self, draft: AssetDraft, session: Option<&Session>) -> ApiResult<Uuid> {
        let record = AssetRecord::from_draft(&self.schema, &draft)?;
        // friendly pre-check; the unique constraint is the authoritative guard
        self.reject_duplicate_key(&record.natural_key).await?;

        if let Err(error) = self.assets.create_batch(vec![record.clone()]).await {
            if is_unique_violation(error.as_ref()) {
                return Err(ApiError::DuplicateKey(record.natural_key));
            }
            return Err(db_error(error));
        }

        self.logger
            .log_action(ActionType::Add, LogPayload::Snapshot(&record), session)
            .await;
        Ok(record.id)
    }

    async fn update_asset(
        &self,
        id: Uuid,
        draft: AssetDraft,
        session: Option<&Session>,
    ) -> ApiResult<()> {
        let old = self.load_existing(id).await?;
        let fields = self.schema.validate_draft(&draft)?;
        let new = AssetRecord::from_fields(&self.schema, id, fields);

        if new.natural_key != old.natural_key {
            self.reject_duplicate_key(&new.natural_key).await?;
        }

        if let Err(error) = self.assets.update_batch(vec![new.clone()]).await {
            if is_unique_violation(error.as_ref()) {
                return Err(ApiError::DuplicateKey(new.natural_key));
            }
            return Err(db_error(error));
        }

        self.logger
            .log_action(
                ActionType::Edit,
                LogPayload::Edit {
                    old: &old,
                    new: &new,
                },
                session,
            )
            .await;
        Ok(())
    }

    async fn delete_asset(&self, id: Uuid, session: Option<&Session>) -> ApiResult<()> {
        let old = self.load_existing(id).await?;
        let deleted = self.assets.delete_batch(&[id]).await.map_err(db_error)?;
        if deleted == 0 {
            return Err(ApiError::NotFound(format!("asset {id}")));
        }

        self.logger
            .log_action(ActionType::Delete, LogPayload::Snapshot(&old), session)
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_services;
    use inventory_core_api::{ApiError, AssetCommandService, AssetDraft};
    use serial_test::serial;
    use uuid::Uuid;

    fn draft(tag: &str) -> AssetDraft {
        AssetDraft::new()
            .set("serviceTag", tag)
            .set("model", "Latitude 5520")
            .set("status", "Stored")
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn test_add_edit_delete_round_trip() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let services = setup_test_services().await?;
        let tag = format!("SVC-{}", Uuid::new_v4().simple());

        let id = services.asset_command.add_asset(draft(&tag), None).await?;

        let mut edited = draft(&tag);
        edited = edited.set("model", "Precision 3590");
        services.asset_command.update_asset(id, edited, None).await?;

        services.asset_command.delete_asset(id, None).await?;
        let err = services.asset_command.delete_asset(id, None).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires PostgreSQL via DATABASE_URL"]
    async fn test_duplicate_service_tag_is_blocked() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let services = setup_test_services().await?;
        let tag = format!("SVC-{}", Uuid::new_v4().simple());

        services.asset_command.add_asset(draft(&tag), None).await?;
        let err = services.asset_command.add_asset(draft(&tag), None).await.unwrap_err();
        assert!(matches!(err, ApiError::DuplicateKey(key) if key == tag));

        Ok(())
    }
}
