//! Per-weapon build selections.

use super::slots::pad_slots;
use crate::config::EngineConfig;

pub type WeaponModSlots = [Option<String>; EngineConfig::WEAPON_MOD_SLOTS];

/// The persisted mod and core selection for one weapon.
///
/// A missing build is the empty build: no mods, no core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponBuild {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::slots::deserialize")
    )]
    pub mods: WeaponModSlots,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::slots::deserialize_id")
    )]
    pub core: Option<String>,
}

impl WeaponBuild {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a build slot by slot.
    pub fn builder() -> WeaponBuildBuilder {
        WeaponBuildBuilder::default()
    }

    /// Builds from any number of raw mod ids; extras are dropped, gaps are empty.
    pub fn from_raw(
        mods: impl IntoIterator<Item = Option<String>>,
        core: Option<String>,
    ) -> Self {
        Self {
            mods: pad_slots(mods),
            core: core.filter(|id| !id.trim().is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_none() && self.mods.iter().all(Option::is_none)
    }
}

/// Builder for constructing weapon builds.
#[derive(Default)]
pub struct WeaponBuildBuilder {
    mods: Vec<Option<String>>,
    core: Option<String>,
}

impl WeaponBuildBuilder {
    /// Fills the next mod slot.
    pub fn mod_slot(mut self, id: impl Into<String>) -> Self {
        self.mods.push(Some(id.into()));
        self
    }

    /// Leaves the next mod slot empty.
    pub fn empty_slot(mut self) -> Self {
        self.mods.push(None);
        self
    }

    pub fn core(mut self, id: impl Into<String>) -> Self {
        self.core = Some(id.into());
        self
    }

    pub fn build(self) -> WeaponBuild {
        WeaponBuild::from_raw(self.mods, self.core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_slots_in_order() {
        let build = WeaponBuild::builder()
            .empty_slot()
            .mod_slot("dmg_10")
            .core("core_pierce")
            .build();
        assert_eq!(build.mods, [None, Some("dmg_10".to_string()), None]);
        assert_eq!(build.core.as_deref(), Some("core_pierce"));
        assert!(!build.is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert!(WeaponBuild::empty().is_empty());
    }
}
