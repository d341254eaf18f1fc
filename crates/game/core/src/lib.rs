//! Deterministic equipment composition rules shared across clients.
//!
//! `armory-core` derives the effective weapon a player fights with from a base
//! definition plus the persisted mod/core selection, and folds equipped armour
//! into a player-wide effects record. Everything is a pure function of the
//! [`CatalogOracle`] and the caller's [`PersistedState`]: no I/O, no caching,
//! no errors after the catalog has been built.
//!
//! [`LoadoutEngine`] is the usual entry point; the free functions in [`engine`]
//! expose each pipeline stage on its own.
pub mod catalog;
pub mod config;
pub mod effect;
pub mod effective;
pub mod engine;
pub mod error;
pub mod state;

#[cfg(test)]
mod testing;

pub use catalog::{
    ArmourDefinition, ArmourIntrinsics, ArmourModDefinition, Catalog, CatalogBuilder,
    CatalogOracle, ModClass, ProjectileKind, TypeLock, WeaponCoreDefinition, WeaponDefinition,
    WeaponDefinitionBuilder, WeaponModDefinition, WeaponTraits,
};
pub use config::EngineConfig;
pub use effect::{
    ArmourStatEffect, ArmourStatEffects, PlayerEffectOp, PlayerEffectOps, WeaponEffect,
    WeaponEffects, WeaponFilter,
};
pub use effective::{
    ClusterPayload, DamageOverTime, EffectiveArmourStats, EffectiveWeapon, PlayerEffects,
    SpecialBehavior,
};
pub use engine::{
    LoadoutEngine, aggregate_effects, compose, compose_armour_stats, legal_cores, legal_mods,
    sanitize, sanitize_armour_mods,
};
pub use error::{CatalogError, CatalogTable};
pub use state::{
    ArmourModSlots, ArmourState, PersistedState, WeaponBuild, WeaponBuildBuilder, WeaponModSlots,
};
