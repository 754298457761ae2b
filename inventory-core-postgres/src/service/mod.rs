pub mod asset_command;
pub mod change_logger;
pub mod import;

pub use asset_command::*;
pub use change_logger::*;
pub use import::*;

use inventory_core_api::ApiError;

pub(crate) fn db_error(error: Box<dyn std::error::Error + Send + Sync>) -> ApiError {
    ApiError::DatabaseError(error.to_string())
}

/// Whether a boxed repository error is a Postgres unique-constraint
/// violation (a natural-key collision).
pub(crate) fn is_unique_violation(error: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    matches!(
        error.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db)) if db.is_unique_violation()
    )
}
