use std::sync::Arc;

use inventory_core_api::RecordSchema;
use sqlx::PgPool;

use crate::repository::asset::asset_repository::AssetRepositoryImpl;
use crate::repository::audit::change_log_repository::ChangeLogRepositoryImpl;
use crate::service::asset_command::AssetCommandServiceImpl;
use crate::service::change_logger::ChangeLogger;
use crate::service::import::CsvImportService;

/// Entry point for everything Postgres-backed: repositories share one
/// connection pool and every batch operation opens its own transaction.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn create_asset_repositories(&self) -> AssetRepositories {
        AssetRepositories {
            asset_repository: Arc::new(AssetRepositoryImpl::new(self.pool.clone())),
        }
    }

    pub fn create_audit_repositories(&self) -> AuditRepositories {
        AuditRepositories {
            change_log_repository: Arc::new(ChangeLogRepositoryImpl::new(self.pool.clone())),
        }
    }

    /// Wire the full service stack for one deployment schema.
    pub fn create_services(&self, schema: RecordSchema) -> InventoryServices {
        let assets = Arc::new(AssetRepositoryImpl::new(self.pool.clone()));
        let logs = Arc::new(ChangeLogRepositoryImpl::new(self.pool.clone()));
        InventoryServices {
            asset_command: AssetCommandServiceImpl::new(
                schema.clone(),
                assets.clone(),
                ChangeLogger::new(logs.clone()),
            ),
            import: CsvImportService::new(schema, assets, ChangeLogger::new(logs)),
        }
    }
}

pub struct AssetRepositories {
    pub asset_repository: Arc<AssetRepositoryImpl>,
}

pub struct AuditRepositories {
    pub change_log_repository: Arc<ChangeLogRepositoryImpl>,
}

pub struct InventoryServices {
    pub asset_command: AssetCommandServiceImpl,
    pub import: CsvImportService,
}
