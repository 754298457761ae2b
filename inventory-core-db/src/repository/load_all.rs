use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for fetching the full collection
///
/// The record sets this application manages are small (hundreds of
/// documents), so the page loads the whole collection once and derives
/// every view from the in-memory copy.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait LoadAll<DB: Database, T: Identifiable>: Send + Sync {
    /// Load every entity in the collection, in creation order
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All entities
    /// * `Err` - An error if the query could not be executed
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
