pub mod draft;
pub mod report;
pub mod schema;
pub mod session;
pub mod value;

// Re-exports
pub use draft::*;
pub use report::*;
pub use schema::*;
pub use session::*;
pub use value::*;
