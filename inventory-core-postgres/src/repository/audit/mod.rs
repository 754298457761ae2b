pub mod change_log_repository;

pub use change_log_repository::ChangeLogRepositoryImpl;
