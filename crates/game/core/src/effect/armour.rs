//! Armour-mod transform operations.
//!
//! An armour mod carries two independent lists: one over the armour-stats sheet,
//! one over the player-effects accumulator.

use arrayvec::ArrayVec;

use super::scale::percent_floor;
use crate::config::EngineConfig;
use crate::effective::{EffectiveArmourStats, PlayerEffects};

pub type ArmourStatEffects = ArrayVec<ArmourStatEffect, { EngineConfig::MAX_EFFECTS }>;
pub type PlayerEffectOps = ArrayVec<PlayerEffectOp, { EngineConfig::MAX_EFFECTS }>;

/// Transform over [`EffectiveArmourStats`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmourStatEffect {
    MaxHp(i32),
    MaxShield(i32),
    MoveSpeedPercent(i32),
    DashRegenPercent(i32),
    ShieldRegen(f32),
    ExplosionResistPercent(i32),
    ShieldOverflowGuard,
}

impl ArmourStatEffect {
    pub fn apply(&self, stats: EffectiveArmourStats) -> EffectiveArmourStats {
        match *self {
            Self::MaxHp(v) => EffectiveArmourStats {
                max_hp_bonus: stats.max_hp_bonus.saturating_add(v),
                ..stats
            },
            Self::MaxShield(v) => EffectiveArmourStats {
                max_shield_bonus: stats.max_shield_bonus.saturating_add(v),
                ..stats
            },
            Self::MoveSpeedPercent(p) => EffectiveArmourStats {
                move_speed_percent: stats.move_speed_percent.saturating_add(p),
                ..stats
            },
            Self::DashRegenPercent(p) => EffectiveArmourStats {
                dash_regen_percent: stats.dash_regen_percent.saturating_add(p),
                ..stats
            },
            Self::ShieldRegen(v) => EffectiveArmourStats {
                shield_regen_bonus: stats.shield_regen_bonus + v,
                ..stats
            },
            Self::ExplosionResistPercent(p) => EffectiveArmourStats {
                explosion_resist_percent: stats.explosion_resist_percent.saturating_add(p),
                ..stats
            },
            Self::ShieldOverflowGuard => EffectiveArmourStats {
                shield_overflow_guard: true,
                ..stats
            },
        }
    }
}

/// Transform over [`PlayerEffects`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerEffectOp {
    BonusHp(i32),
    /// Multiplies the running move-speed multiplier.
    MoveSpeedMult(f32),
    /// Floors a percentage change to the dash recharge time.
    DashRegenPercent(i32),
    ShieldRegenBonus(f32),
    /// Multiplies damage taken from enemy explosions.
    EnemyExplosionDamageMul(f32),
    PreventShieldOverflow,
}

impl PlayerEffectOp {
    pub fn apply(&self, effects: PlayerEffects) -> PlayerEffects {
        match *self {
            Self::BonusHp(v) => PlayerEffects {
                bonus_hp: effects.bonus_hp.saturating_add(v),
                ..effects
            },
            Self::MoveSpeedMult(m) => PlayerEffects {
                move_speed_mult: effects.move_speed_mult * m,
                ..effects
            },
            Self::DashRegenPercent(p) => PlayerEffects {
                dash_regen_ms: percent_floor(effects.dash_regen_ms, p),
                ..effects
            },
            Self::ShieldRegenBonus(v) => PlayerEffects {
                shield_regen_bonus: effects.shield_regen_bonus + v,
                ..effects
            },
            Self::EnemyExplosionDamageMul(m) => PlayerEffects {
                enemy_explosion_dmg_mul: effects.enemy_explosion_dmg_mul * m,
                ..effects
            },
            Self::PreventShieldOverflow => PlayerEffects {
                prevent_shield_overflow: true,
                ..effects
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_ops_accumulate() {
        let effects = [
            PlayerEffectOp::BonusHp(40),
            PlayerEffectOp::MoveSpeedMult(0.9),
            PlayerEffectOp::DashRegenPercent(-25),
            PlayerEffectOp::PreventShieldOverflow,
        ]
        .iter()
        .fold(PlayerEffects::identity(2000), |acc, op| op.apply(acc));

        assert_eq!(effects.bonus_hp, 40);
        assert_eq!(effects.move_speed_mult, 0.9);
        assert_eq!(effects.dash_regen_ms, 1500);
        assert!(effects.prevent_shield_overflow);
    }

    #[test]
    fn stat_ops_accumulate() {
        let stats = [
            ArmourStatEffect::MaxHp(40),
            ArmourStatEffect::MoveSpeedPercent(-10),
            ArmourStatEffect::MaxHp(10),
        ]
        .iter()
        .fold(EffectiveArmourStats::identity(), |acc, op| op.apply(acc));

        assert_eq!(stats.max_hp_bonus, 50);
        assert_eq!(stats.move_speed_percent, -10);
        assert!(!stats.shield_overflow_guard);
    }
}
