use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::draft::AssetDraft;
use crate::domain::session::Session;
use crate::error::ApiResult;

/// Service seam for single-record mutations.
///
/// Every successful mutation is mirrored into the change log with the
/// caller's attribution; logging is best-effort and never fails the
/// mutation itself.
#[async_trait]
pub trait AssetCommandService: Send + Sync {
    /// Create a record from a draft.
    ///
    /// # Returns
    /// * `Ok(Uuid)` - the store-assigned identifier of the new record
    /// * `Err(ApiError::ValidationError)` - a required field is blank or a
    ///   number field does not parse
    /// * `Err(ApiError::DuplicateKey)` - the natural key already exists
    async fn add_asset(&self, draft: AssetDraft, session: Option<&Session>) -> ApiResult<Uuid>;

    /// Replace an existing record's attributes with a validated draft.
    ///
    /// Renaming the natural key onto another record's key is rejected as a
    /// duplicate.
    async fn update_asset(
        &self,
        id: Uuid,
        draft: AssetDraft,
        session: Option<&Session>,
    ) -> ApiResult<()>;

    /// Delete a record by identifier.
    async fn delete_asset(&self, id: Uuid, session: Option<&Session>) -> ApiResult<()>;
}
