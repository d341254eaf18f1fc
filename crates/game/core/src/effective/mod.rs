//! Derived, ephemeral views recomputed on every read. Never persisted.
mod armour;
mod weapon;

pub use armour::{EffectiveArmourStats, PlayerEffects};
pub use weapon::{ClusterPayload, DamageOverTime, EffectiveWeapon, SpecialBehavior};
