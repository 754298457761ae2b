pub mod derive;
pub mod filter;
pub mod search;
pub mod sort;
pub mod state;

// Re-exports
pub use derive::*;
pub use search::*;
pub use sort::*;
pub use state::*;
