//! Engine configuration loader.

use std::path::Path;

use armory_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML source.
    pub fn parse(source: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.default_dash_regen_ms < EngineConfig::MIN_DASH_REGEN_MS {
            tracing::warn!(
                "default_dash_regen_ms {} is below the {}ms floor and will be clamped",
                config.default_dash_regen_ms,
                EngineConfig::MIN_DASH_REGEN_MS
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dash_regen() {
        let config = ConfigLoader::parse("default_dash_regen_ms = 1600").unwrap();
        assert_eq!(config.default_dash_regen_ms, 1600);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn rejects_wrong_type() {
        assert!(ConfigLoader::parse("default_dash_regen_ms = \"fast\"").is_err());
    }
}
