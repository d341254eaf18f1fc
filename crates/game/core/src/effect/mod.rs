//! Tagged transform operations and applicability filters.
//!
//! Catalog entries are data: a [`WeaponFilter`] deciding where the entry applies
//! and a short list of operations folded onto the running item. Adding content
//! means adding rows, never touching the composer.
mod armour;
mod filter;
pub mod scale;
mod weapon;

pub use armour::{ArmourStatEffect, ArmourStatEffects, PlayerEffectOp, PlayerEffectOps};
pub use filter::WeaponFilter;
pub use weapon::{WeaponEffect, WeaponEffects, apply_all};
