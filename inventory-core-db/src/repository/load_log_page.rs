use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for reading an append-only log newest-first
///
/// Backs the activity-log view: entries ordered by recording time
/// descending, sliced into fixed-size pages.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entry type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// let page = repo.load_page(PageRequest::for_page(10, 1)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait LoadLogPage<DB: Database, T: Identifiable>: Send + Sync {
    /// Load one page of entries, newest first
    ///
    /// # Arguments
    /// * `page` - The pagination parameters (limit and offset)
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested slice plus total count
    /// * `Err` - An error if the query could not be executed
    async fn load_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
