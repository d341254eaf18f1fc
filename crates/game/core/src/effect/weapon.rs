//! Weapon transform operations.

use arrayvec::ArrayVec;

use super::scale::{offset, percent_ceil, percent_f32, percent_floor, percent_floor_min};
use crate::catalog::ProjectileKind;
use crate::config::EngineConfig;
use crate::effective::{ClusterPayload, DamageOverTime, EffectiveWeapon, SpecialBehavior};

/// Effect list carried by a mod or core entry.
pub type WeaponEffects = ArrayVec<WeaponEffect, { EngineConfig::MAX_EFFECTS }>;

/// A single pure transform `EffectiveWeapon -> EffectiveWeapon`.
///
/// Percentages are whole numbers. Rounding is fixed per field: damage and speed
/// floor, magazine bonuses ceil, fire interval and reload floor then clamp to a
/// positive minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponEffect {
    DamagePercent(i32),
    DamageFlat(i32),
    FireIntervalPercent(i32),
    ReloadPercent(i32),
    MagazinePercent(i32),
    MagazineFlat(i32),
    ProjectileSpeedPercent(i32),
    ExtraPellets(i32),
    /// Scales both the resting spread and its cap.
    SpreadPercent(i32),
    SetProjectile(ProjectileKind),
    Special(SpecialBehavior),
    DamageOverTime(DamageOverTime),
    Cluster(ClusterPayload),
}

impl WeaponEffect {
    /// Applies this operation to the running weapon.
    pub fn apply(&self, weapon: EffectiveWeapon) -> EffectiveWeapon {
        match *self {
            Self::DamagePercent(p) => {
                let damage = percent_floor(weapon.damage, p);
                weapon.with_damage(damage)
            }
            Self::DamageFlat(delta) => {
                let damage = offset(weapon.damage, delta);
                weapon.with_damage(damage)
            }
            Self::FireIntervalPercent(p) => {
                let ms = percent_floor_min(
                    weapon.fire_interval_ms,
                    p,
                    EngineConfig::MIN_FIRE_INTERVAL_MS,
                );
                weapon.with_fire_interval_ms(ms)
            }
            Self::ReloadPercent(p) => {
                let ms = percent_floor_min(weapon.reload_ms, p, EngineConfig::MIN_RELOAD_MS);
                weapon.with_reload_ms(ms)
            }
            Self::MagazinePercent(p) => {
                let mag = percent_ceil(weapon.mag_size, p).max(1);
                weapon.with_mag_size(mag)
            }
            Self::MagazineFlat(delta) => {
                let mag = offset(weapon.mag_size, delta).max(1);
                weapon.with_mag_size(mag)
            }
            Self::ProjectileSpeedPercent(p) => {
                let speed = percent_floor(weapon.projectile_speed, p);
                weapon.with_projectile_speed(speed)
            }
            Self::ExtraPellets(delta) => {
                let pellets = offset(weapon.pellets, delta).max(1);
                weapon.with_pellets(pellets)
            }
            Self::SpreadPercent(p) => {
                let base = percent_f32(weapon.spread_deg, p);
                let max = percent_f32(weapon.max_spread_deg, p);
                weapon.with_spread(base, max)
            }
            Self::SetProjectile(kind) => weapon.with_projectile(kind),
            Self::Special(special) => weapon.with_special(special),
            Self::DamageOverTime(dot) => weapon.with_damage_over_time(dot),
            Self::Cluster(payload) => weapon.with_cluster(payload),
        }
    }
}

/// Folds an effect list left to right.
pub fn apply_all(effects: &[WeaponEffect], weapon: EffectiveWeapon) -> EffectiveWeapon {
    effects.iter().fold(weapon, |acc, effect| effect.apply(acc))
}
