pub mod repo_impl;

pub mod append;
pub mod load_page;

pub use repo_impl::ChangeLogRepositoryImpl;
