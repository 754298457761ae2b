pub mod asset_command;
pub mod import;

// Re-exports
pub use asset_command::*;
pub use import::*;
