//! Content factory for building the catalog and config from data files.

use std::path::{Path, PathBuf};

use armory_core::{Catalog, EngineConfig};

use crate::files;
use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads all equipment content from a data directory.
///
/// See [`crate::files`] for the expected layout.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file yields the default config.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join(files::CONFIG);
        if !path.exists() {
            tracing::info!("{} not found, using default engine config", path.display());
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load and validate the catalog tables.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        tracing::info!("loading catalog from {}", self.data_dir.display());
        CatalogLoader::load(&self.data_dir)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::CatalogOracle;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn shipped_data_dir_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.weapons()[0].id, "pistol");
        assert_eq!(factory.load_config().unwrap().default_dash_regen_ms, 2000);
    }
}
