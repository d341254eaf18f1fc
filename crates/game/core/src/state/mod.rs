//! Persisted build selections (ids only).
//!
//! These types are owned and mutated by the caller's UI/shop flow and serialized
//! by an external save system. The engine never writes to them.
mod armour;
mod build;
mod persisted;
pub mod slots;

pub use armour::{ArmourModSlots, ArmourState};
pub use build::{WeaponBuild, WeaponBuildBuilder, WeaponModSlots};
pub use persisted::PersistedState;
