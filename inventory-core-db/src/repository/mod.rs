pub mod append_log;
pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod find_by_natural_key;
pub mod load;
pub mod load_all;
pub mod load_batch;
pub mod load_log_page;
pub mod pagination;
pub mod update_batch;

// Re-exports
pub use append_log::*;
pub use create_batch::*;
pub use delete_batch::*;
pub use exist_by_ids::*;
pub use find_by_natural_key::*;
pub use load::*;
pub use load_all::*;
pub use load_batch::*;
pub use load_log_page::*;
pub use pagination::*;
pub use update_batch::*;
