//! Content loaders for reading catalog and config data from files.
//!
//! Catalog tables are RON lists, one file per table; the engine config is TOML.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{CatalogLoader, CatalogSources};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
