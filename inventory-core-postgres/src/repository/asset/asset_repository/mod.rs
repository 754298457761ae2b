pub mod repo_impl;
pub mod row;

pub mod commit_import;
pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod find_by_natural_key;
pub mod load_all;
pub mod load_batch;
pub mod update_batch;

pub use repo_impl::AssetRepositoryImpl;

#[cfg(test)]
pub mod test_utils;
