//! Loadout composition pipeline.
//!
//! The [`LoadoutEngine`] bundles a catalog oracle with the engine config and exposes
//! the two read-only entry points callers use every frame: the effective weapon
//! for a persisted build, and the aggregated player effects from equipped armour.
//! Nothing here fails or caches: every call recomputes from the catalog and the
//! caller's state.

mod armour;
mod compat;
mod compose;
mod sanitize;

pub use armour::{aggregate_effects, compose_armour_stats};
pub use compat::{legal_cores, legal_mods};
pub use compose::compose;
pub use sanitize::{sanitize, sanitize_armour_mods};

use crate::catalog::{CatalogOracle, WeaponDefinition};
use crate::config::EngineConfig;
use crate::effective::{EffectiveArmourStats, EffectiveWeapon, PlayerEffects};
use crate::state::{ArmourState, PersistedState, WeaponBuild};

/// Read-only façade over the composition pipeline.
///
/// Borrows the catalog for its lifetime; the engine never holds or mutates
/// caller state.
pub struct LoadoutEngine<'a, C: CatalogOracle + ?Sized> {
    catalog: &'a C,
    config: &'a EngineConfig,
}

impl<C: CatalogOracle + ?Sized> Clone for LoadoutEngine<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CatalogOracle + ?Sized> Copy for LoadoutEngine<'_, C> {}

impl<'a, C: CatalogOracle + ?Sized> LoadoutEngine<'a, C> {
    /// Creates a new engine over the given catalog and config.
    pub fn new(catalog: &'a C, config: &'a EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    pub fn sanitize<S: AsRef<str>>(&self, mods: &[Option<S>]) -> Vec<Option<String>> {
        sanitize(self.catalog, mods)
    }

    pub fn compose<S: AsRef<str>>(
        &self,
        base: &WeaponDefinition,
        mods: &[Option<S>],
        core: Option<&str>,
    ) -> EffectiveWeapon {
        compose(self.catalog, base, mods, core)
    }

    pub fn compose_armour_stats(&self, armour: &ArmourState) -> EffectiveArmourStats {
        compose_armour_stats(self.catalog, armour)
    }

    pub fn aggregate_effects(&self, state: &PersistedState) -> PlayerEffects {
        aggregate_effects(self.catalog, self.config, state)
    }

    /// Effective weapon for `weapon_id` under the persisted build.
    ///
    /// Unknown weapon ids resolve to the catalog's default weapon. The build is
    /// looked up under the caller's id, so a build saved for a weapon that later
    /// left the catalog is never applied to the fallback.
    pub fn effective_weapon(&self, state: &PersistedState, weapon_id: &str) -> EffectiveWeapon {
        let base = self.catalog.weapon(weapon_id);
        let empty = WeaponBuild::empty();
        let build = match state.build_for(weapon_id) {
            Some(build) if base.id == weapon_id => build,
            _ => &empty,
        };

        let mods = self.sanitize(&build.mods);
        let weapon = self.compose(base, &mods, build.core.as_deref());
        tracing::trace!(
            "effective weapon {}: damage={} interval={}ms mag={} reload={}ms",
            weapon.id,
            weapon.damage,
            weapon.fire_interval_ms,
            weapon.mag_size,
            weapon.reload_ms
        );
        weapon
    }

    /// Player-wide effects from the equipped armour, its mods and the dash setting.
    pub fn player_effects(&self, state: &PersistedState) -> PlayerEffects {
        self.aggregate_effects(state)
    }

    /// Armour-sheet view of the equipped armour mods.
    pub fn armour_stats(&self, state: &PersistedState) -> EffectiveArmourStats {
        self.compose_armour_stats(&state.armour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_catalog;

    #[test]
    fn missing_build_is_base_weapon() {
        let catalog = fixture_catalog();
        let config = EngineConfig::default();
        let engine = LoadoutEngine::new(&catalog, &config);

        let weapon = engine.effective_weapon(&PersistedState::new(), "rifle");
        assert_eq!(weapon, EffectiveWeapon::from(catalog.weapon("rifle")));
    }

    #[test]
    fn unknown_weapon_falls_back_to_default() {
        let catalog = fixture_catalog();
        let config = EngineConfig::default();
        let engine = LoadoutEngine::new(&catalog, &config);

        let state = PersistedState::new().with_build(
            "nonexistent",
            WeaponBuild::builder().mod_slot("dmg_10").build(),
        );
        let weapon = engine.effective_weapon(&state, "nonexistent");
        assert_eq!(weapon, EffectiveWeapon::from(catalog.weapon("pistol")));
    }

    #[test]
    fn duplicate_and_extra_magazine_mods_sanitized() {
        let catalog = fixture_catalog();
        let config = EngineConfig::default();
        let engine = LoadoutEngine::new(&catalog, &config);

        let build = WeaponBuild::builder()
            .mod_slot("mag_quickload")
            .mod_slot("mag_extended")
            .mod_slot("mag_quickload")
            .build();
        let state = PersistedState::new().with_build("rifle", build);
        let weapon = engine.effective_weapon(&state, "rifle");
        assert_eq!(weapon.mag_size, 11);
        assert_eq!(weapon.reload_ms, 700);
    }

    #[test]
    fn effects_follow_persisted_armour() {
        let catalog = fixture_catalog();
        let config = EngineConfig::with_default_dash_regen_ms(1800);
        let engine = LoadoutEngine::new(&catalog, &config);

        let state = PersistedState::new()
            .with_armour(ArmourState::standard_issue().with_mod(0, "plating_40"));
        let effects = engine.player_effects(&state);
        assert_eq!(effects.bonus_hp, 40);
        assert_eq!(effects.dash_regen_ms, 1800);

        let stats = engine.armour_stats(&state);
        assert_eq!(stats.max_hp_bonus, 40);
    }
}
