pub mod changelog;
pub mod import;
pub mod models;
pub mod repository;
pub mod utils;
pub mod view;
