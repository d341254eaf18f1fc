//! Armour and armour-mod entries.

use crate::effect::{ArmourStatEffects, PlayerEffectOps};
use crate::effective::{EffectiveArmourStats, PlayerEffects};

/// Baseline traits of a base armour, applied outside the mod fold.
///
/// `max_hp`/`max_shield` are equip-time values read by the caller. The speed
/// multiplier and dash cap are applied as the last aggregation step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourIntrinsics {
    pub max_hp: u32,
    pub max_shield: u32,
    pub move_speed_mult: f32,
    /// Dash recharge never exceeds this once the armour is equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dash_regen_cap_ms: Option<u32>,
}

impl ArmourIntrinsics {
    pub const STANDARD_MAX_HP: u32 = 100;
    pub const STANDARD_MAX_SHIELD: u32 = 50;

    /// Applies the speed multiplier and dash cap on top of mod-granted effects.
    pub fn apply(&self, effects: PlayerEffects) -> PlayerEffects {
        let dash_regen_ms = match self.dash_regen_cap_ms {
            Some(cap) => effects.dash_regen_ms.min(cap),
            None => effects.dash_regen_ms,
        };
        PlayerEffects {
            move_speed_mult: effects.move_speed_mult * self.move_speed_mult,
            dash_regen_ms,
            ..effects
        }
    }
}

impl Default for ArmourIntrinsics {
    fn default() -> Self {
        Self {
            max_hp: Self::STANDARD_MAX_HP,
            max_shield: Self::STANDARD_MAX_SHIELD,
            move_speed_mult: 1.0,
            dash_regen_cap_ms: None,
        }
    }
}

/// A base armour. `id: None` is the default "Standard Issue" suit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourDefinition {
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub intrinsics: ArmourIntrinsics,
}

impl ArmourDefinition {
    pub fn standard_issue() -> Self {
        Self {
            id: None,
            name: "Standard Issue".to_string(),
            description: String::new(),
            price: 0,
            intrinsics: ArmourIntrinsics::default(),
        }
    }
}

/// A modifier for one of the armour's mod slots.
///
/// The stats and effects transforms are independent: the armour sheet and the
/// player-effects consumers each read their own view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourModDefinition {
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: ArmourStatEffects,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: PlayerEffectOps,
}

impl ArmourModDefinition {
    /// The null "Empty" entry.
    pub fn empty() -> Self {
        Self {
            id: None,
            name: "Empty".to_string(),
            description: String::new(),
            price: 0,
            stats: ArmourStatEffects::new(),
            effects: PlayerEffectOps::new(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.id.is_none() && self.stats.is_empty() && self.effects.is_empty()
    }

    pub fn apply_stats(&self, stats: EffectiveArmourStats) -> EffectiveArmourStats {
        self.stats.iter().fold(stats, |acc, op| op.apply(acc))
    }

    pub fn apply_effects(&self, effects: PlayerEffects) -> PlayerEffects {
        self.effects.iter().fold(effects, |acc, op| op.apply(acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrinsic_cap_only_tightens() {
        let intrinsics = ArmourIntrinsics {
            dash_regen_cap_ms: Some(1200),
            move_speed_mult: 1.1,
            ..ArmourIntrinsics::default()
        };

        let slow = intrinsics.apply(PlayerEffects::identity(2000));
        assert_eq!(slow.dash_regen_ms, 1200);

        let fast = intrinsics.apply(PlayerEffects::identity(900));
        assert_eq!(fast.dash_regen_ms, 900);
        assert_eq!(fast.move_speed_mult, 1.1);
    }

    #[test]
    fn standard_issue_is_neutral() {
        let effects = PlayerEffects::identity(2000);
        let applied = ArmourDefinition::standard_issue().intrinsics.apply(effects.clone());
        assert_eq!(applied, effects);
    }
}
