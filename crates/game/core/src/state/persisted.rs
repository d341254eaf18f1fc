//! The persisted slice of the save file the engine reads.

use std::collections::BTreeMap;

use super::{ArmourState, WeaponBuild};

/// Build selections owned by the external save system. The engine only reads it.
///
/// Every field defaults, so partial or legacy saves deserialize to the nearest
/// legal configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PersistedState {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::slots::deserialize_map_entries")
    )]
    pub weapon_builds: BTreeMap<String, WeaponBuild>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::slots::deserialize_or_default")
    )]
    pub armour: ArmourState,
    /// The player's base dash recharge time; engine config supplies it when absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub dash_regen_ms: Option<u32>,
}

impl PersistedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The build for a weapon, or `None` when the player never configured it.
    pub fn build_for(&self, weapon_id: &str) -> Option<&WeaponBuild> {
        self.weapon_builds.get(weapon_id)
    }

    #[must_use]
    pub fn with_build(mut self, weapon_id: impl Into<String>, build: WeaponBuild) -> Self {
        self.weapon_builds.insert(weapon_id.into(), build);
        self
    }

    #[must_use]
    pub fn with_armour(mut self, armour: ArmourState) -> Self {
        self.armour = armour;
        self
    }

    #[must_use]
    pub fn with_dash_regen_ms(mut self, dash_regen_ms: u32) -> Self {
        self.dash_regen_ms = Some(dash_regen_ms);
        self
    }
}
