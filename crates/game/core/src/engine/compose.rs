//! Folds mods and a core onto a base weapon.
//!
//! The composer has no weapon-id branching: type-lock rows, applicability filters
//! and `only_for` all come from catalog data.

use crate::catalog::{CatalogOracle, WeaponDefinition};
use crate::effective::EffectiveWeapon;

/// Composes the effective weapon for a base definition and a sanitized selection.
///
/// 1. Type-lock pre-pass: on locked categories, off-list mods and any core other
///    than the permitted one become null.
/// 2. Mods fold in slot order; each sees the running weapon. Unknown ids resolve
///    to the identity mod, mods rejecting the base weapon are no-ops.
/// 3. The core folds last and re-checks `only_for` and its predicate.
pub fn compose<S: AsRef<str>>(
    catalog: &(impl CatalogOracle + ?Sized),
    base: &WeaponDefinition,
    mods: &[Option<S>],
    core: Option<&str>,
) -> EffectiveWeapon {
    let mods: Vec<Option<&str>> = mods
        .iter()
        .map(|slot| slot.as_ref().map(|id| id.as_ref()))
        .collect();
    let (mods, core) = type_lock(catalog, base, &mods, core);

    let folded = mods
        .iter()
        .flatten()
        .copied()
        .fold(EffectiveWeapon::from(base), |weapon, id| {
            let entry = catalog.weapon_mod(Some(id));
            if !entry.permits(base) {
                tracing::trace!("compose: mod {:?} does not apply to {}", id, base.id);
            }
            entry.apply(base, weapon)
        });

    let entry = catalog.weapon_core(core);
    if core.is_some() && !entry.permits(base) {
        tracing::trace!("compose: core {:?} does not apply to {}", core, base.id);
    }
    entry.apply(base, folded)
}

/// Applies the covering type-lock row, if any.
fn type_lock<'a>(
    catalog: &(impl CatalogOracle + ?Sized),
    base: &WeaponDefinition,
    mods: &[Option<&'a str>],
    core: Option<&'a str>,
) -> (Vec<Option<&'a str>>, Option<&'a str>) {
    let Some(lock) = catalog.type_lock_for(base) else {
        return (mods.to_vec(), core);
    };

    let restricted_mods = lock.restrict_mods(mods);
    let restricted_core = lock.restrict_core(core);
    if restricted_mods.as_slice() != mods || restricted_core != core {
        tracing::debug!(
            "type-lock {:?} on {}: mods {:?} -> {:?}, core {:?} -> {:?}",
            lock.name,
            base.id,
            mods,
            restricted_mods,
            core,
            restricted_core
        );
    }
    (restricted_mods, restricted_core)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::effective::SpecialBehavior;
    use crate::testing::fixture_catalog;
    use proptest::prelude::*;

    const NO_MODS: [Option<&str>; 3] = [None, None, None];

    #[test]
    fn empty_selection_is_identity() {
        let catalog = fixture_catalog();
        let base = catalog.weapon("rifle");
        let weapon = compose(&catalog, base, &NO_MODS, None);
        assert_eq!(weapon, EffectiveWeapon::from(base));
    }

    #[test]
    fn damage_mod_floors() {
        let catalog = fixture_catalog();
        let base = WeaponDefinition::builder("rifle", "Rifle")
            .damage(10)
            .fire_interval_ms(100)
            .build();
        let weapon = compose(&catalog, &base, &[Some("dmg_10"), None, None], None);
        assert_eq!(weapon.damage, 11);
        assert_eq!(weapon.fire_interval_ms, 100);
    }

    #[test]
    fn mods_fold_on_running_value() {
        let catalog = fixture_catalog();
        let base = catalog.weapon("rifle");
        let weapon = compose(
            &catalog,
            base,
            &[Some("rapid_fire"), Some("rapid_fire_2"), None],
            None,
        );
        // 200 -> 170 -> 144 (144.5 floored)
        assert_eq!(weapon.fire_interval_ms, 144);
    }

    #[test]
    fn magazine_quickload() {
        let catalog = fixture_catalog();
        let base = catalog.weapon("rifle");
        let weapon = compose(&catalog, base, &[Some("mag_quickload"), None, None], None);
        assert_eq!(weapon.mag_size, 11);
        assert_eq!(weapon.reload_ms, 700);
    }

    #[test]
    fn inapplicable_mod_is_noop() {
        let catalog = fixture_catalog();
        let base = catalog.weapon("pistol");
        // fuel_tank only applies to flamethrowers
        let weapon = compose(&catalog, base, &[Some("fuel_tank"), None, None], None);
        assert_eq!(weapon, EffectiveWeapon::from(base));
    }

    #[test]
    fn unknown_ids_are_noops() {
        let catalog = fixture_catalog();
        let base = catalog.weapon("rifle");
        let weapon = compose(&catalog, base, &[Some("ghost"), None, None], Some("ghost_core"));
        assert_eq!(weapon, EffectiveWeapon::from(base));
    }

    #[test]
    fn core_applies_to_its_weapon_only() {
        let catalog = fixture_catalog();
        let rifle = catalog.weapon("rifle");
        let pistol = catalog.weapon("pistol");

        let on_rifle = compose(&catalog, rifle, &NO_MODS, Some("core_pierce"));
        assert_eq!(on_rifle.special, SpecialBehavior::Pierce { targets: 3 });

        let on_pistol = compose(&catalog, pistol, &NO_MODS, Some("core_pierce"));
        assert_eq!(on_pistol, EffectiveWeapon::from(pistol));
    }

    #[test]
    fn core_folds_after_mods() {
        let catalog = fixture_catalog();
        let rifle = catalog.weapon("rifle");
        // rifle damage 20: dmg_10 -> 22, core_pierce +50% -> 33
        let weapon = compose(&catalog, rifle, &[Some("dmg_10"), None, None], Some("core_pierce"));
        assert_eq!(weapon.damage, 33);
    }

    #[test]
    fn type_lock_drops_foreign_core() {
        let catalog = fixture_catalog();
        let flamer = catalog.weapon("flamer");
        let locked = compose(&catalog, flamer, &NO_MODS, Some("core_overclock"));
        let bare = compose(&catalog, flamer, &NO_MODS, None);
        assert_eq!(locked, bare);

        let permitted = compose(&catalog, flamer, &NO_MODS, Some("core_inferno"));
        assert_ne!(permitted, bare);
    }

    #[test]
    fn type_lock_drops_foreign_mods() {
        let catalog = fixture_catalog();
        let flamer = catalog.weapon("flamer");
        let locked = compose(
            &catalog,
            flamer,
            &[Some("rapid_fire"), Some("fuel_tank"), None],
            None,
        );
        let expected = compose(&catalog, flamer, &[None, Some("fuel_tank"), None], None);
        assert_eq!(locked, expected);
        assert!(locked.fire_interval_ms >= EngineConfig::MIN_FIRE_INTERVAL_MS);
    }

    fn mod_id() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("dmg_10".to_string())),
            Just(Some("rapid_fire".to_string())),
            Just(Some("rapid_fire_2".to_string())),
            Just(Some("mag_quickload".to_string())),
            Just(Some("fuel_tank".to_string())),
            Just(Some("ghost".to_string())),
        ]
    }

    proptest! {
        #[test]
        fn deterministic(mods in prop::collection::vec(mod_id(), 3)) {
            let catalog = fixture_catalog();
            let base = catalog.weapon("rifle");
            let a = compose(&catalog, base, &mods, Some("core_pierce"));
            let b = compose(&catalog, base, &mods, Some("core_pierce"));
            prop_assert_eq!(a, b);
        }

        #[test]
        fn type_lock_containment(mods in prop::collection::vec(mod_id(), 3)) {
            let catalog = fixture_catalog();
            let flamer = catalog.weapon("flamer");
            let lock = catalog.type_lock_for(flamer).cloned().unwrap();
            let nulled: Vec<Option<String>> = mods
                .iter()
                .map(|slot| slot.clone().filter(|id| lock.allows_mod(id)))
                .collect();
            prop_assert_eq!(
                compose(&catalog, flamer, &mods, None),
                compose(&catalog, flamer, &nulled, None)
            );
        }
    }
}
