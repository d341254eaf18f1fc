//! Static, immutable registries of weapons, mods, cores, armours and armour mods.
//!
//! The [`CatalogOracle`] trait is the read-only seam the engine consumes; every
//! lookup resolves unknown or null ids to the table's designated default entry
//! and never fails. [`Catalog`] is the in-memory implementation, validated once
//! at startup so that default entry is guaranteed to exist.
mod armour;
mod type_lock;
mod weapon;
mod weapon_mod;

use std::collections::HashSet;

pub use armour::{ArmourDefinition, ArmourIntrinsics, ArmourModDefinition};
pub use type_lock::TypeLock;
pub use weapon::{ProjectileKind, WeaponDefinition, WeaponDefinitionBuilder, WeaponTraits};
pub use weapon_mod::{ModClass, WeaponCoreDefinition, WeaponModDefinition};

use crate::error::{CatalogError, CatalogTable};

/// Read-only catalog access with lookup-with-fallback semantics.
///
/// Implementations must never panic: unknown ids resolve to the first weapon,
/// and null/unknown modifier ids resolve to the table's identity entry.
pub trait CatalogOracle: Send + Sync {
    /// Weapon by id, or the default (first) weapon.
    fn weapon(&self, id: &str) -> &WeaponDefinition;

    /// Weapon mod by id, or the "no mod" entry.
    fn weapon_mod(&self, id: Option<&str>) -> &WeaponModDefinition;

    /// Weapon core by id, or the "no core" entry.
    fn weapon_core(&self, id: Option<&str>) -> &WeaponCoreDefinition;

    /// Armour by id, or "Standard Issue".
    fn armour(&self, id: Option<&str>) -> &ArmourDefinition;

    /// Armour mod by id, or the "Empty" entry.
    fn armour_mod(&self, id: Option<&str>) -> &ArmourModDefinition;

    /// The first type-lock row covering this weapon, if any.
    fn type_lock_for(&self, weapon: &WeaponDefinition) -> Option<&TypeLock>;

    fn weapons(&self) -> &[WeaponDefinition];

    fn weapon_mods(&self) -> &[WeaponModDefinition];

    fn weapon_cores(&self) -> &[WeaponCoreDefinition];

    fn armours(&self) -> &[ArmourDefinition];

    fn armour_mods(&self) -> &[ArmourModDefinition];
}

/// In-memory catalog tables.
#[derive(Clone, Debug)]
pub struct Catalog {
    weapons: Vec<WeaponDefinition>,
    weapon_mods: Vec<WeaponModDefinition>,
    weapon_cores: Vec<WeaponCoreDefinition>,
    armours: Vec<ArmourDefinition>,
    armour_mods: Vec<ArmourModDefinition>,
    type_locks: Vec<TypeLock>,
}

impl Catalog {
    /// Validates raw tables, as loaded from content files, into a catalog.
    pub fn new(
        weapons: Vec<WeaponDefinition>,
        weapon_mods: Vec<WeaponModDefinition>,
        weapon_cores: Vec<WeaponCoreDefinition>,
        armours: Vec<ArmourDefinition>,
        armour_mods: Vec<ArmourModDefinition>,
        type_locks: Vec<TypeLock>,
    ) -> Result<Self, CatalogError> {
        CatalogBuilder::from_tables(
            weapons,
            weapon_mods,
            weapon_cores,
            armours,
            armour_mods,
            type_locks,
        )
        .build()
    }

    /// Creates a builder for assembling catalog tables.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.weapons.is_empty() {
            return Err(CatalogError::EmptyTable(CatalogTable::Weapons));
        }
        unique_ids(
            CatalogTable::Weapons,
            self.weapons.iter().map(|w| Some(w.id.as_str())).enumerate(),
        )?;

        check_identity(
            CatalogTable::WeaponMods,
            self.weapon_mods.first().map(|m| (m.id.clone(), m.is_identity())),
        )?;
        unique_ids(
            CatalogTable::WeaponMods,
            self.weapon_mods.iter().map(|m| m.id.as_deref()).enumerate().skip(1),
        )?;

        check_identity(
            CatalogTable::WeaponCores,
            self.weapon_cores.first().map(|c| (c.id.clone(), c.is_identity())),
        )?;
        unique_ids(
            CatalogTable::WeaponCores,
            self.weapon_cores.iter().map(|c| c.id.as_deref()).enumerate().skip(1),
        )?;

        check_identity(
            CatalogTable::Armours,
            self.armours.first().map(|a| (a.id.clone(), a.id.is_none())),
        )?;
        unique_ids(
            CatalogTable::Armours,
            self.armours.iter().map(|a| a.id.as_deref()).enumerate().skip(1),
        )?;

        check_identity(
            CatalogTable::ArmourMods,
            self.armour_mods.first().map(|m| (m.id.clone(), m.is_identity())),
        )?;
        unique_ids(
            CatalogTable::ArmourMods,
            self.armour_mods.iter().map(|m| m.id.as_deref()).enumerate().skip(1),
        )?;

        self.validate_references()
    }

    fn validate_references(&self) -> Result<(), CatalogError> {
        let weapon_ids: HashSet<&str> = self.weapons.iter().map(|w| w.id.as_str()).collect();
        let mod_ids: HashSet<&str> = self
            .weapon_mods
            .iter()
            .filter_map(|m| m.id.as_deref())
            .collect();
        let core_ids: HashSet<&str> = self
            .weapon_cores
            .iter()
            .filter_map(|c| c.id.as_deref())
            .collect();

        let unknown = |from, owner: &str, to, id: &str| CatalogError::UnknownReference {
            from,
            owner: owner.to_string(),
            to,
            id: id.to_string(),
        };

        for core in self.weapon_cores.iter().skip(1) {
            let owner = core.id.as_deref().unwrap_or_default();
            let referenced = core
                .only_for
                .as_deref()
                .into_iter()
                .chain(core.applies_to.referenced_weapons());
            for id in referenced {
                if !weapon_ids.contains(id) {
                    return Err(unknown(CatalogTable::WeaponCores, owner, CatalogTable::Weapons, id));
                }
            }
        }

        for entry in self.weapon_mods.iter().skip(1) {
            let owner = entry.id.as_deref().unwrap_or_default();
            for id in entry.applies_to.referenced_weapons() {
                if !weapon_ids.contains(id) {
                    return Err(unknown(CatalogTable::WeaponMods, owner, CatalogTable::Weapons, id));
                }
            }
        }

        for lock in &self.type_locks {
            for id in &lock.allowed_mods {
                if !mod_ids.contains(id.as_str()) {
                    return Err(unknown(CatalogTable::TypeLocks, &lock.name, CatalogTable::WeaponMods, id));
                }
            }
            if let Some(core) = lock.core.as_deref() {
                if !core_ids.contains(core) {
                    return Err(unknown(CatalogTable::TypeLocks, &lock.name, CatalogTable::WeaponCores, core));
                }
            }
        }

        Ok(())
    }

    pub fn type_locks(&self) -> &[TypeLock] {
        &self.type_locks
    }
}

fn check_identity(
    table: CatalogTable,
    first: Option<(Option<String>, bool)>,
) -> Result<(), CatalogError> {
    match first {
        None => Err(CatalogError::EmptyTable(table)),
        Some((None, true)) => Ok(()),
        Some((found, _)) => Err(CatalogError::MissingIdentity { table, found }),
    }
}

/// Checks `(row, id)` pairs; `row` is the position in the full table.
fn unique_ids<'a>(
    table: CatalogTable,
    rows: impl Iterator<Item = (usize, Option<&'a str>)>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, id) in rows {
        let Some(id) = id else {
            return Err(CatalogError::UnexpectedNullId { table, index });
        };
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn find_by_id<'a, T>(
    table: &'a [T],
    id: Option<&str>,
    key: impl Fn(&T) -> Option<&str>,
    label: CatalogTable,
) -> &'a T {
    if let Some(id) = id {
        if let Some(entry) = table.iter().find(|&entry| key(entry) == Some(id)) {
            return entry;
        }
        tracing::debug!("unknown {} id {:?}, falling back to default entry", label, id);
    }
    &table[0]
}

impl CatalogOracle for Catalog {
    fn weapon(&self, id: &str) -> &WeaponDefinition {
        find_by_id(&self.weapons, Some(id), |w| Some(w.id.as_str()), CatalogTable::Weapons)
    }

    fn weapon_mod(&self, id: Option<&str>) -> &WeaponModDefinition {
        find_by_id(&self.weapon_mods, id, |m| m.id.as_deref(), CatalogTable::WeaponMods)
    }

    fn weapon_core(&self, id: Option<&str>) -> &WeaponCoreDefinition {
        find_by_id(&self.weapon_cores, id, |c| c.id.as_deref(), CatalogTable::WeaponCores)
    }

    fn armour(&self, id: Option<&str>) -> &ArmourDefinition {
        find_by_id(&self.armours, id, |a| a.id.as_deref(), CatalogTable::Armours)
    }

    fn armour_mod(&self, id: Option<&str>) -> &ArmourModDefinition {
        find_by_id(&self.armour_mods, id, |m| m.id.as_deref(), CatalogTable::ArmourMods)
    }

    fn type_lock_for(&self, weapon: &WeaponDefinition) -> Option<&TypeLock> {
        self.type_locks.iter().find(|lock| lock.covers(weapon))
    }

    fn weapons(&self) -> &[WeaponDefinition] {
        &self.weapons
    }

    fn weapon_mods(&self) -> &[WeaponModDefinition] {
        &self.weapon_mods
    }

    fn weapon_cores(&self) -> &[WeaponCoreDefinition] {
        &self.weapon_cores
    }

    fn armours(&self) -> &[ArmourDefinition] {
        &self.armours
    }

    fn armour_mods(&self) -> &[ArmourModDefinition] {
        &self.armour_mods
    }
}

/// Builder for assembling and validating catalog tables.
///
/// Modifier and armour tables start out holding their identity entry, so callers
/// only push real content.
#[derive(Clone, Debug)]
pub struct CatalogBuilder {
    weapons: Vec<WeaponDefinition>,
    weapon_mods: Vec<WeaponModDefinition>,
    weapon_cores: Vec<WeaponCoreDefinition>,
    armours: Vec<ArmourDefinition>,
    armour_mods: Vec<ArmourModDefinition>,
    type_locks: Vec<TypeLock>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            weapons: Vec::new(),
            weapon_mods: vec![WeaponModDefinition::empty()],
            weapon_cores: vec![WeaponCoreDefinition::empty()],
            armours: vec![ArmourDefinition::standard_issue()],
            armour_mods: vec![ArmourModDefinition::empty()],
            type_locks: Vec::new(),
        }
    }
}

impl CatalogBuilder {
    /// Starts from raw tables, as loaded from content files.
    ///
    /// Tables are taken verbatim, identity entries included.
    pub fn from_tables(
        weapons: Vec<WeaponDefinition>,
        weapon_mods: Vec<WeaponModDefinition>,
        weapon_cores: Vec<WeaponCoreDefinition>,
        armours: Vec<ArmourDefinition>,
        armour_mods: Vec<ArmourModDefinition>,
        type_locks: Vec<TypeLock>,
    ) -> Self {
        Self {
            weapons,
            weapon_mods,
            weapon_cores,
            armours,
            armour_mods,
            type_locks,
        }
    }

    pub fn weapon(mut self, weapon: WeaponDefinition) -> Self {
        self.weapons.push(weapon);
        self
    }

    pub fn weapon_mod(mut self, entry: WeaponModDefinition) -> Self {
        self.weapon_mods.push(entry);
        self
    }

    pub fn weapon_core(mut self, entry: WeaponCoreDefinition) -> Self {
        self.weapon_cores.push(entry);
        self
    }

    pub fn armour(mut self, entry: ArmourDefinition) -> Self {
        self.armours.push(entry);
        self
    }

    pub fn armour_mod(mut self, entry: ArmourModDefinition) -> Self {
        self.armour_mods.push(entry);
        self
    }

    pub fn type_lock(mut self, lock: TypeLock) -> Self {
        self.type_locks.push(lock);
        self
    }

    /// Validates the tables and builds the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let catalog = Catalog {
            weapons: self.weapons,
            weapon_mods: self.weapon_mods,
            weapon_cores: self.weapon_cores,
            armours: self.armours,
            armour_mods: self.armour_mods,
            type_locks: self.type_locks,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}
