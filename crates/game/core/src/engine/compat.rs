//! Shop-facing compatibility queries.
//!
//! Lists the catalog entries that would actually change a weapon: entries rejected
//! by the type-lock or by their own filter are hidden, as are identity entries.

use crate::catalog::{CatalogOracle, WeaponCoreDefinition, WeaponDefinition, WeaponModDefinition};

/// Mods that survive the type-lock and their own applicability check for `base`.
pub fn legal_mods<'c>(
    catalog: &'c (impl CatalogOracle + ?Sized),
    base: &WeaponDefinition,
) -> Vec<&'c WeaponModDefinition> {
    let lock = catalog.type_lock_for(base);
    catalog
        .weapon_mods()
        .iter()
        .filter(|entry| !entry.is_identity())
        .filter(|entry| match (lock, entry.id.as_deref()) {
            (Some(lock), Some(id)) => lock.allows_mod(id),
            (Some(_), None) => false,
            (None, _) => true,
        })
        .filter(|entry| entry.permits(base))
        .collect()
}

/// Cores that survive the type-lock, `only_for` and their predicate for `base`.
pub fn legal_cores<'c>(
    catalog: &'c (impl CatalogOracle + ?Sized),
    base: &WeaponDefinition,
) -> Vec<&'c WeaponCoreDefinition> {
    let lock = catalog.type_lock_for(base);
    catalog
        .weapon_cores()
        .iter()
        .filter(|entry| !entry.is_identity())
        .filter(|entry| match (lock, entry.id.as_deref()) {
            (Some(lock), Some(id)) => lock.allows_core(id),
            (Some(_), None) => false,
            (None, _) => true,
        })
        .filter(|entry| entry.permits(base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_catalog;

    fn ids<'a>(entries: impl IntoIterator<Item = Option<&'a str>>) -> Vec<&'a str> {
        entries.into_iter().flatten().collect()
    }

    #[test]
    fn locked_weapon_lists_allow_list_only() {
        let catalog = fixture_catalog();
        let flamer = catalog.weapon("flamer");

        let mods = legal_mods(&catalog, flamer);
        assert_eq!(
            ids(mods.iter().map(|m| m.id.as_deref())),
            vec!["dmg_10", "fuel_tank", "napalm"]
        );

        let cores = legal_cores(&catalog, flamer);
        assert_eq!(ids(cores.iter().map(|c| c.id.as_deref())), vec!["core_inferno"]);
    }

    #[test]
    fn filters_hide_inapplicable_entries() {
        let catalog = fixture_catalog();
        let rifle = catalog.weapon("rifle");

        let mods = ids(legal_mods(&catalog, rifle).iter().map(|m| m.id.as_deref()));
        assert!(mods.contains(&"rapid_fire"));
        assert!(!mods.contains(&"fuel_tank"));
        assert!(!mods.contains(&"napalm"));

        let cores = ids(legal_cores(&catalog, rifle).iter().map(|c| c.id.as_deref()));
        assert_eq!(cores, vec!["core_pierce", "core_overclock"]);
    }

    #[test]
    fn only_for_hides_foreign_core() {
        let catalog = fixture_catalog();
        let pistol = catalog.weapon("pistol");
        let cores = ids(legal_cores(&catalog, pistol).iter().map(|c| c.id.as_deref()));
        assert_eq!(cores, vec!["core_overclock"]);
    }
}
