//! Type-lock rows for structurally distinct weapon categories.

use crate::catalog::WeaponDefinition;
use crate::effect::WeaponFilter;

/// Restricts mods and cores on weapons accepted by `weapons`.
///
/// Beam and cone weapons have a different stat shape, so most generic mods mean
/// nothing on them. Anything off `allowed_mods` is remapped to null, and the core
/// is remapped to null unless it equals `core`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeLock {
    pub name: String,
    pub weapons: WeaponFilter,
    pub allowed_mods: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub core: Option<String>,
}

impl TypeLock {
    pub fn covers(&self, weapon: &WeaponDefinition) -> bool {
        self.weapons.accepts(weapon)
    }

    pub fn allows_mod(&self, id: &str) -> bool {
        self.allowed_mods.iter().any(|allowed| allowed == id)
    }

    pub fn allows_core(&self, id: &str) -> bool {
        self.core.as_deref() == Some(id)
    }

    /// Remaps illegal mod ids to null.
    pub fn restrict_mods<'a>(&self, mods: &[Option<&'a str>]) -> Vec<Option<&'a str>> {
        mods.iter()
            .map(|slot| slot.filter(|id| self.allows_mod(id)))
            .collect()
    }

    /// Remaps an illegal core id to null.
    pub fn restrict_core<'a>(&self, core: Option<&'a str>) -> Option<&'a str> {
        core.filter(|id| self.allows_core(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WeaponTraits;

    fn cone_lock() -> TypeLock {
        TypeLock {
            name: "area-cone".into(),
            weapons: WeaponFilter::WithTraits(WeaponTraits::FLAMETHROWER),
            allowed_mods: vec!["fuel_tank".into(), "napalm".into()],
            core: Some("core_inferno".into()),
        }
    }

    #[test]
    fn restricts_mods_in_place() {
        let lock = cone_lock();
        let mods = [Some("napalm"), Some("rapid_fire"), None];
        assert_eq!(lock.restrict_mods(&mods), vec![Some("napalm"), None, None]);
    }

    #[test]
    fn restricts_core_to_permitted() {
        let lock = cone_lock();
        assert_eq!(lock.restrict_core(Some("core_inferno")), Some("core_inferno"));
        assert_eq!(lock.restrict_core(Some("core_overclock")), None);
        assert_eq!(lock.restrict_core(None), None);
    }
}
