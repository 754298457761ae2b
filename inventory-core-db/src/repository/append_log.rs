use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for appending to an append-only log collection
///
/// Entries are immutable once written: the log exposes no update or delete
/// operations.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entry type that must implement Identifiable trait
#[async_trait]
pub trait AppendLog<DB: Database, T: Identifiable>: Send + Sync {
    /// Append a single entry
    ///
    /// # Returns
    /// * `Ok(T)` - The appended entry
    /// * `Err` - An error if the write could not be executed
    async fn append(&self, entry: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;

    /// Append several entries in one transaction
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The appended entries
    /// * `Err` - An error if the transaction could not be committed; no
    ///   entry was written
    async fn append_batch(
        &self,
        entries: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
