//! The composed, per-call view of a weapon.

use crate::catalog::{ProjectileKind, WeaponDefinition, WeaponTraits};

/// Behaviour tag assigned by a core. Combat resolution matches on it exhaustively.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialBehavior {
    #[default]
    None,
    /// Projectiles pass through up to `targets` enemies.
    Pierce { targets: u8 },
    /// Impacts explode in a radius (world units).
    Blast { radius: u32 },
    /// Rockets steer towards targets at `turn_rate` radians per second.
    SmartMissile { turn_rate: f32 },
    /// Hits arc to `jumps` nearby enemies.
    Chain { jumps: u8 },
}

/// Damage applied every tick after a hit. Stacks across modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOverTime {
    pub per_tick: u32,
    pub ticks: u32,
}

impl DamageOverTime {
    /// Per-tick damage adds up; the longest duration wins.
    pub fn stack(self, other: DamageOverTime) -> Self {
        Self {
            per_tick: self.per_tick.saturating_add(other.per_tick),
            ticks: self.ticks.max(other.ticks),
        }
    }
}

/// Bomblets released when an explosive projectile detonates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterPayload {
    pub bomblets: u8,
    pub radius: u32,
}

impl ClusterPayload {
    /// Bomblet counts add up; the widest radius wins.
    pub fn stack(self, other: ClusterPayload) -> Self {
        Self {
            bomblets: self.bomblets.saturating_add(other.bomblets),
            radius: self.radius.max(other.radius),
        }
    }
}

/// A weapon after its mods and core have been folded on.
///
/// Values, not objects: every transform takes one by value and returns a new one
/// through the `with_*` constructors below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveWeapon {
    pub id: String,
    pub name: String,
    pub damage: u32,
    pub fire_interval_ms: u32,
    pub projectile_speed: u32,
    pub pellets: u32,
    pub spread_deg: f32,
    pub max_spread_deg: f32,
    pub mag_size: u32,
    pub reload_ms: u32,
    pub price: u32,
    pub traits: WeaponTraits,
    pub projectile: ProjectileKind,
    pub special: SpecialBehavior,
    pub damage_over_time: Option<DamageOverTime>,
    pub cluster: Option<ClusterPayload>,
}

impl From<&WeaponDefinition> for EffectiveWeapon {
    fn from(base: &WeaponDefinition) -> Self {
        Self {
            id: base.id.clone(),
            name: base.name.clone(),
            damage: base.damage,
            fire_interval_ms: base.fire_interval_ms,
            projectile_speed: base.projectile_speed,
            pellets: base.pellets,
            spread_deg: base.spread_deg,
            max_spread_deg: base.max_spread_deg,
            mag_size: base.mag_size,
            reload_ms: base.reload_ms,
            price: base.price,
            traits: base.traits,
            projectile: base.projectile,
            special: SpecialBehavior::None,
            damage_over_time: None,
            cluster: None,
        }
    }
}

impl EffectiveWeapon {
    #[must_use]
    pub fn with_damage(self, damage: u32) -> Self {
        Self { damage, ..self }
    }

    #[must_use]
    pub fn with_fire_interval_ms(self, fire_interval_ms: u32) -> Self {
        Self {
            fire_interval_ms,
            ..self
        }
    }

    #[must_use]
    pub fn with_projectile_speed(self, projectile_speed: u32) -> Self {
        Self {
            projectile_speed,
            ..self
        }
    }

    #[must_use]
    pub fn with_pellets(self, pellets: u32) -> Self {
        Self { pellets, ..self }
    }

    #[must_use]
    pub fn with_spread(self, spread_deg: f32, max_spread_deg: f32) -> Self {
        Self {
            spread_deg,
            max_spread_deg,
            ..self
        }
    }

    #[must_use]
    pub fn with_mag_size(self, mag_size: u32) -> Self {
        Self { mag_size, ..self }
    }

    #[must_use]
    pub fn with_reload_ms(self, reload_ms: u32) -> Self {
        Self { reload_ms, ..self }
    }

    #[must_use]
    pub fn with_projectile(self, projectile: ProjectileKind) -> Self {
        Self { projectile, ..self }
    }

    #[must_use]
    pub fn with_special(self, special: SpecialBehavior) -> Self {
        Self { special, ..self }
    }

    /// Stacks a damage-over-time effect onto whatever is already present.
    #[must_use]
    pub fn with_damage_over_time(self, dot: DamageOverTime) -> Self {
        let damage_over_time = Some(match self.damage_over_time {
            Some(existing) => existing.stack(dot),
            None => dot,
        });
        Self {
            damage_over_time,
            ..self
        }
    }

    /// Stacks a cluster payload onto whatever is already present.
    #[must_use]
    pub fn with_cluster(self, payload: ClusterPayload) -> Self {
        let cluster = Some(match self.cluster {
            Some(existing) => existing.stack(payload),
            None => payload,
        });
        Self { cluster, ..self }
    }

    /// Shots per second implied by the fire interval.
    pub fn shots_per_second(&self) -> f32 {
        1000.0 / self.fire_interval_ms.max(1) as f32
    }

    /// Raw damage per trigger pull, all pellets hitting.
    pub fn damage_per_shot(&self) -> u32 {
        self.damage.saturating_mul(self.pellets)
    }
}
