pub mod postgres_repositories;
pub mod repository;
pub mod service;

pub use postgres_repositories::PostgresRepositories;
pub use repository::asset::asset_repository::AssetRepositoryImpl;
pub use repository::audit::change_log_repository::ChangeLogRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
