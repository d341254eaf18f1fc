//! Serializable snapshot of every derived view for one save.

use std::collections::BTreeMap;

use armory_core::{EffectiveArmourStats, EffectiveWeapon, PlayerEffects};
use serde::Serialize;

/// Effective weapons for the whole catalog plus the armour views.
///
/// Built fresh from a [`PersistedState`](armory_core::PersistedState); never saved.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutSummary {
    /// Keyed by weapon id, in id order.
    pub weapons: BTreeMap<String, EffectiveWeapon>,
    pub armour: EffectiveArmourStats,
    pub effects: PlayerEffects,
}

impl LoadoutSummary {
    pub fn weapon(&self, id: &str) -> Option<&EffectiveWeapon> {
        self.weapons.get(id)
    }
}
