use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for natural-key lookups
///
/// The natural key is the user-meaningful identifying attribute (service
/// tag, part number), distinct from the store-assigned id. Lookups go
/// through a stable i64 hash column with an index, then verify the exact
/// key, so hash collisions cannot produce a false match.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindByNaturalKey<Postgres, AssetRecord> for AssetRepositoryImpl {
///     async fn find_by_natural_key(&self, natural_key: &str) -> Result<Option<AssetRecord>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindByNaturalKey<DB: Database, T: Identifiable>: Send + Sync {
    /// Find the entity carrying a natural key, if any
    ///
    /// # Arguments
    /// * `natural_key` - The trimmed natural-key value to look up
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The entity with exactly this key
    /// * `Ok(None)` - No entity carries the key
    /// * `Err` - An error if the query could not be executed
    async fn find_by_natural_key(
        &self,
        natural_key: &str,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
