use std::sync::Arc;

use async_trait::async_trait;
use inventory_core_db::{
    models::asset::AssetRecord,
    repository::{load::Load, load_batch::LoadBatch},
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Postgres-backed repository for the "assets" collection.
///
/// Every batch operation opens its own transaction on the shared pool;
/// partial per-row success is never exposed.
pub struct AssetRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl AssetRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Load<Postgres, AssetRecord> for AssetRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<AssetRecord, Box<dyn std::error::Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        results
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| "Entity not found".into())
    }
}
