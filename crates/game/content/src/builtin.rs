//! Content shipped inside the binary.
//!
//! The files under `data/` are embedded at compile time and parsed on demand,
//! so tests and tools work without a data directory on disk.

use armory_core::{Catalog, EngineConfig};

use crate::loaders::{CatalogLoader, CatalogSources, ConfigLoader, LoadResult};

const SOURCES: CatalogSources<'static> = CatalogSources {
    weapons: include_str!("../data/weapons.ron"),
    weapon_mods: include_str!("../data/weapon_mods.ron"),
    weapon_cores: include_str!("../data/weapon_cores.ron"),
    armours: include_str!("../data/armours.ron"),
    armour_mods: include_str!("../data/armour_mods.ron"),
    type_locks: include_str!("../data/type_locks.ron"),
};

const CONFIG: &str = include_str!("../data/config.toml");

/// The built-in equipment catalog and engine config.
pub struct BuiltinContent;

impl BuiltinContent {
    /// Parses and validates the embedded catalog.
    pub fn catalog() -> LoadResult<Catalog> {
        CatalogLoader::parse(SOURCES)
    }

    /// Parses the embedded engine config.
    pub fn config() -> LoadResult<EngineConfig> {
        ConfigLoader::parse(CONFIG)
    }
}
