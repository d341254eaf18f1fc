//! Weapon mod and weapon core entries.

use crate::catalog::WeaponDefinition;
use crate::effect::{WeaponEffects, WeaponFilter, apply_all};
use crate::effective::EffectiveWeapon;

/// Mod category. At most one `Magazine` mod survives sanitization per build.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ModClass {
    #[default]
    General,
    Magazine,
}

/// A composable modifier selectable into one of a weapon's mod slots.
///
/// The entry with `id: None` is the catalog's "no mod" identity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponModDefinition {
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class: ModClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub applies_to: WeaponFilter,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: WeaponEffects,
}

impl WeaponModDefinition {
    /// The null "no mod" entry.
    pub fn empty() -> Self {
        Self {
            id: None,
            name: "No Mod".to_string(),
            description: String::new(),
            price: 0,
            class: ModClass::General,
            applies_to: WeaponFilter::Any,
            effects: WeaponEffects::new(),
        }
    }

    pub fn is_magazine(&self) -> bool {
        self.class == ModClass::Magazine
    }

    pub fn is_identity(&self) -> bool {
        self.id.is_none() && self.effects.is_empty()
    }

    /// Whether this mod may legally apply to the base weapon.
    pub fn permits(&self, base: &WeaponDefinition) -> bool {
        self.applies_to.accepts(base)
    }

    /// Folds this mod onto the running weapon; a no-op when the base rejects it.
    pub fn apply(&self, base: &WeaponDefinition, current: EffectiveWeapon) -> EffectiveWeapon {
        if !self.permits(base) {
            return current;
        }
        apply_all(&self.effects, current)
    }
}

/// The single, often weapon-specific, core slot of a build.
///
/// The entry with `id: None` is the catalog's "no core" identity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponCoreDefinition {
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: u32,
    /// Restricts the core to exactly one weapon id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub only_for: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub applies_to: WeaponFilter,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: WeaponEffects,
}

impl WeaponCoreDefinition {
    /// The null "no core" entry.
    pub fn empty() -> Self {
        Self {
            id: None,
            name: "No Core".to_string(),
            description: String::new(),
            price: 0,
            only_for: None,
            applies_to: WeaponFilter::Any,
            effects: WeaponEffects::new(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.id.is_none() && self.effects.is_empty()
    }

    /// Whether the core's `only_for` and predicate both accept the base weapon.
    pub fn permits(&self, base: &WeaponDefinition) -> bool {
        let id_matches = self.only_for.as_deref().is_none_or(|only| only == base.id);
        id_matches && self.applies_to.accepts(base)
    }

    /// Folds this core onto the running weapon.
    ///
    /// Re-checks `only_for` and the predicate itself, so applying a core to the
    /// wrong weapon is a no-op no matter who calls it.
    pub fn apply(&self, base: &WeaponDefinition, current: EffectiveWeapon) -> EffectiveWeapon {
        if !self.permits(base) {
            return current;
        }
        apply_all(&self.effects, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::WeaponEffect;
    use crate::effective::SpecialBehavior;

    fn pierce_core() -> WeaponCoreDefinition {
        let mut effects = crate::effect::WeaponEffects::new();
        effects.push(WeaponEffect::Special(SpecialBehavior::Pierce { targets: 3 }));
        WeaponCoreDefinition {
            id: Some("core_pierce".into()),
            name: "Piercer".into(),
            only_for: Some("rifle".into()),
            effects,
            ..WeaponCoreDefinition::empty()
        }
    }

    #[test]
    fn core_rejects_other_weapons() {
        let rifle = WeaponDefinition::builder("rifle", "Rifle").build();
        let pistol = WeaponDefinition::builder("pistol", "Pistol").build();
        let core = pierce_core();

        let on_rifle = core.apply(&rifle, EffectiveWeapon::from(&rifle));
        assert_eq!(on_rifle.special, SpecialBehavior::Pierce { targets: 3 });

        let on_pistol = core.apply(&pistol, EffectiveWeapon::from(&pistol));
        assert_eq!(on_pistol, EffectiveWeapon::from(&pistol));
    }

    #[test]
    fn empty_entries_are_identity() {
        assert!(WeaponModDefinition::empty().is_identity());
        assert!(WeaponCoreDefinition::empty().is_identity());
    }
}
