//! Catalog loader.

use std::path::Path;

use armory_core::{Catalog, CatalogOracle};
use serde::de::DeserializeOwned;

use crate::files;
use crate::loaders::{LoadResult, read_file};

/// Raw RON source for each catalog table.
#[derive(Clone, Copy, Debug)]
pub struct CatalogSources<'a> {
    pub weapons: &'a str,
    pub weapon_mods: &'a str,
    pub weapon_cores: &'a str,
    pub armours: &'a str,
    pub armour_mods: &'a str,
    pub type_locks: &'a str,
}

/// Loader for the equipment catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate every catalog table from `data_dir`.
    pub fn load(data_dir: &Path) -> LoadResult<Catalog> {
        let weapons = read_file(&data_dir.join(files::WEAPONS))?;
        let weapon_mods = read_file(&data_dir.join(files::WEAPON_MODS))?;
        let weapon_cores = read_file(&data_dir.join(files::WEAPON_CORES))?;
        let armours = read_file(&data_dir.join(files::ARMOURS))?;
        let armour_mods = read_file(&data_dir.join(files::ARMOUR_MODS))?;
        let type_locks = read_file(&data_dir.join(files::TYPE_LOCKS))?;

        Self::parse(CatalogSources {
            weapons: &weapons,
            weapon_mods: &weapon_mods,
            weapon_cores: &weapon_cores,
            armours: &armours,
            armour_mods: &armour_mods,
            type_locks: &type_locks,
        })
    }

    /// Parse and validate a catalog from in-memory RON sources.
    pub fn parse(sources: CatalogSources<'_>) -> LoadResult<Catalog> {
        let catalog = Catalog::new(
            parse_table(files::WEAPONS, sources.weapons)?,
            parse_table(files::WEAPON_MODS, sources.weapon_mods)?,
            parse_table(files::WEAPON_CORES, sources.weapon_cores)?,
            parse_table(files::ARMOURS, sources.armours)?,
            parse_table(files::ARMOUR_MODS, sources.armour_mods)?,
            parse_table(files::TYPE_LOCKS, sources.type_locks)?,
        )
        .map_err(|e| anyhow::anyhow!("Invalid catalog: {}", e))?;

        warn_unreachable_entries(&catalog);
        tracing::info!(
            "loaded catalog: {} weapons, {} mods, {} cores, {} armours, {} armour mods",
            catalog.weapons().len(),
            catalog.weapon_mods().len() - 1,
            catalog.weapon_cores().len() - 1,
            catalog.armours().len(),
            catalog.armour_mods().len() - 1
        );
        Ok(catalog)
    }
}

fn parse_table<T: DeserializeOwned>(file: &str, source: &str) -> LoadResult<Vec<T>> {
    ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", file, e))
}

/// Warns about mods and cores no weapon in the catalog can ever use.
fn warn_unreachable_entries(catalog: &Catalog) {
    let weapons = catalog.weapons();

    for entry in catalog.weapon_mods().iter().skip(1) {
        if !weapons.iter().any(|w| entry.permits(w)) {
            tracing::warn!("weapon mod {:?} applies to no weapon", entry.id);
        }
    }
    for entry in catalog.weapon_cores().iter().skip(1) {
        if !weapons.iter().any(|w| entry.permits(w)) {
            tracing::warn!("weapon core {:?} applies to no weapon", entry.id);
        }
    }
}
