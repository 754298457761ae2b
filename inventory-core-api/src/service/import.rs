use async_trait::async_trait;

use crate::domain::report::ImportReport;
use crate::domain::session::Session;
use crate::error::ApiResult;

/// Service seam for bulk CSV import.
#[async_trait]
pub trait ImportService: Send + Sync {
    /// Parse a CSV document, reconcile its rows against the current record
    /// set and commit all resulting writes as a single batch.
    ///
    /// # Arguments
    /// * `csv_text` - UTF-8 CSV with a header row matching the schema labels
    /// * `session` - the authenticated user, for change-log attribution
    ///
    /// # Returns
    /// * `Ok(ImportReport)` - inserted/updated/skipped/dropped counts
    /// * `Err(ApiError::ValidationError)` - the header row is unusable
    /// * `Err(ApiError::DatabaseError)` - the batch commit failed; no row
    ///   of this run was applied
    async fn import_csv(&self, csv_text: &str, session: Option<&Session>)
        -> ApiResult<ImportReport>;
}
