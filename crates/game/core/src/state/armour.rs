//! Equipped armour selection.

use super::slots::pad_slots;
use crate::config::EngineConfig;

pub type ArmourModSlots = [Option<String>; EngineConfig::ARMOUR_MOD_SLOTS];

/// The persisted armour id and its mod slots. `id: None` is Standard Issue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourState {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::slots::deserialize_id")
    )]
    pub id: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::slots::deserialize")
    )]
    pub mods: ArmourModSlots,
}

impl ArmourState {
    pub fn standard_issue() -> Self {
        Self::default()
    }

    pub fn new(id: Option<&str>, mods: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            id: id.filter(|id| !id.trim().is_empty()).map(str::to_string),
            mods: pad_slots(mods),
        }
    }

    /// Equips a mod into a slot; out-of-range slots are ignored.
    #[must_use]
    pub fn with_mod(mut self, slot: usize, id: impl Into<String>) -> Self {
        if let Some(entry) = self.mods.get_mut(slot) {
            *entry = Some(id.into());
        }
        self
    }
}
