pub mod action_type;
pub mod change_log;
pub mod field_change;

// Re-exports
pub use action_type::*;
pub use change_log::*;
pub use field_change::*;
