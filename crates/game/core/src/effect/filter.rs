//! Applicability predicates over base weapons.
//!
//! Every weapon-specific restriction lives in catalog data as a [`WeaponFilter`];
//! the composer only ever asks "does this entry accept this base weapon".

use crate::catalog::{ProjectileKind, WeaponDefinition, WeaponTraits};

/// A predicate over a base [`WeaponDefinition`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponFilter {
    /// Accepts every weapon.
    #[default]
    Any,
    /// Accepts the listed weapon ids only.
    Weapons(Vec<String>),
    /// Accepts weapons launching one of the listed projectile kinds.
    Projectile(Vec<ProjectileKind>),
    /// Accepts weapons carrying all of the given traits.
    WithTraits(WeaponTraits),
    /// Accepts weapons carrying none of the given traits.
    WithoutTraits(WeaponTraits),
    /// Accepts weapons firing at least this many pellets per shot.
    MinPellets(u32),
    All(Vec<WeaponFilter>),
    AnyOf(Vec<WeaponFilter>),
    Not(Box<WeaponFilter>),
}

impl WeaponFilter {
    /// Evaluates the predicate against a base weapon.
    pub fn accepts(&self, weapon: &WeaponDefinition) -> bool {
        match self {
            Self::Any => true,
            Self::Weapons(ids) => ids.iter().any(|id| *id == weapon.id),
            Self::Projectile(kinds) => kinds.contains(&weapon.projectile),
            Self::WithTraits(traits) => weapon.traits.contains(*traits),
            Self::WithoutTraits(traits) => !weapon.traits.intersects(*traits),
            Self::MinPellets(min) => weapon.pellets >= *min,
            Self::All(filters) => filters.iter().all(|f| f.accepts(weapon)),
            Self::AnyOf(filters) => filters.iter().any(|f| f.accepts(weapon)),
            Self::Not(filter) => !filter.accepts(weapon),
        }
    }

    /// Shorthand for projectile weapons that are neither beams nor cones.
    pub fn ballistic() -> Self {
        Self::WithoutTraits(WeaponTraits::LASER | WeaponTraits::FLAMETHROWER)
    }

    /// Weapon ids this filter names explicitly, used for catalog validation.
    pub(crate) fn referenced_weapons(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_weapons(&mut ids);
        ids
    }

    fn collect_weapons<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Weapons(ids) => out.extend(ids.iter().map(String::as_str)),
            Self::All(filters) | Self::AnyOf(filters) => {
                filters.iter().for_each(|f| f.collect_weapons(out))
            }
            Self::Not(filter) => filter.collect_weapons(out),
            _ => {}
        }
    }
}
