//! Armour folds: the armour-stats sheet and the player-effects aggregate.
//!
//! Both folds walk the same two mod slots left to right. Mod-to-mod order is
//! preserved even where today's content happens to commute.

use super::sanitize::sanitize_armour_mods;
use crate::catalog::CatalogOracle;
use crate::config::EngineConfig;
use crate::effective::{EffectiveArmourStats, PlayerEffects};
use crate::state::{ArmourState, PersistedState};

/// Folds every equipped armour mod's stats transform over the identity sheet.
pub fn compose_armour_stats(
    catalog: &(impl CatalogOracle + ?Sized),
    armour: &ArmourState,
) -> EffectiveArmourStats {
    sanitize_armour_mods(&armour.mods)
        .iter()
        .fold(EffectiveArmourStats::identity(), |stats, id| {
            catalog.armour_mod(id.as_deref()).apply_stats(stats)
        })
}

/// Aggregates player-wide effects from the equipped armour and its mods.
///
/// Seeded with identity values around the player's dash recharge time, folds
/// each mod's effects transform by slot, then applies the base armour's
/// intrinsic traits last.
pub fn aggregate_effects(
    catalog: &(impl CatalogOracle + ?Sized),
    config: &EngineConfig,
    state: &PersistedState,
) -> PlayerEffects {
    let dash_regen_ms = state.dash_regen_ms.unwrap_or(config.default_dash_regen_ms);

    let from_mods = sanitize_armour_mods(&state.armour.mods)
        .iter()
        .fold(PlayerEffects::identity(dash_regen_ms), |effects, id| {
            catalog.armour_mod(id.as_deref()).apply_effects(effects)
        });

    catalog
        .armour(state.armour.id.as_deref())
        .intrinsics
        .apply(from_mods)
        .clamped()
}
