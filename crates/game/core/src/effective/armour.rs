//! Armour-derived views: the armour-stats sheet and the player-wide effects.

use crate::config::EngineConfig;

/// Armour-level view of the equipped mods, as shown on an armour sheet.
///
/// Seeded from [`EffectiveArmourStats::identity`]; each mod folds its stats
/// transform on top.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveArmourStats {
    pub max_hp_bonus: i32,
    pub max_shield_bonus: i32,
    /// Signed percentage applied to move speed (`-10` = 10% slower).
    pub move_speed_percent: i32,
    /// Signed percentage applied to dash recharge time.
    pub dash_regen_percent: i32,
    pub shield_regen_bonus: f32,
    /// Percentage of enemy explosion damage ignored.
    pub explosion_resist_percent: i32,
    pub shield_overflow_guard: bool,
}

impl EffectiveArmourStats {
    pub fn identity() -> Self {
        Self::default()
    }
}

/// Additive/multiplicative accumulator consumed by movement, dash and shield systems.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerEffects {
    pub bonus_hp: i32,
    pub move_speed_mult: f32,
    pub dash_regen_ms: u32,
    pub shield_regen_bonus: f32,
    pub enemy_explosion_dmg_mul: f32,
    pub prevent_shield_overflow: bool,
}

impl PlayerEffects {
    /// Identity effects around the player's own dash recharge time.
    pub fn identity(dash_regen_ms: u32) -> Self {
        Self {
            bonus_hp: 0,
            move_speed_mult: 1.0,
            dash_regen_ms,
            shield_regen_bonus: 0.0,
            enemy_explosion_dmg_mul: 1.0,
            prevent_shield_overflow: false,
        }
    }

    /// Clamps fields into the range downstream systems can consume.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            move_speed_mult: self.move_speed_mult.max(0.0),
            dash_regen_ms: self.dash_regen_ms.max(EngineConfig::MIN_DASH_REGEN_MS),
            enemy_explosion_dmg_mul: self.enemy_explosion_dmg_mul.max(0.0),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_values() {
        let effects = PlayerEffects::identity(1800);
        assert_eq!(effects.bonus_hp, 0);
        assert_eq!(effects.move_speed_mult, 1.0);
        assert_eq!(effects.dash_regen_ms, 1800);
        assert_eq!(effects.enemy_explosion_dmg_mul, 1.0);
        assert!(!effects.prevent_shield_overflow);
    }

    #[test]
    fn clamp_keeps_dash_positive() {
        let effects = PlayerEffects {
            dash_regen_ms: 10,
            move_speed_mult: -0.5,
            ..PlayerEffects::identity(0)
        }
        .clamped();
        assert_eq!(effects.dash_regen_ms, EngineConfig::MIN_DASH_REGEN_MS);
        assert_eq!(effects.move_speed_mult, 0.0);
    }
}
