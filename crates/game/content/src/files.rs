//! File names inside a content data directory.
//!
//! ```text
//! data_dir/
//! ├── config.toml
//! ├── weapons.ron
//! ├── weapon_mods.ron
//! ├── weapon_cores.ron
//! ├── armours.ron
//! ├── armour_mods.ron
//! └── type_locks.ron
//! ```

pub const CONFIG: &str = "config.toml";
pub const WEAPONS: &str = "weapons.ron";
pub const WEAPON_MODS: &str = "weapon_mods.ron";
pub const WEAPON_CORES: &str = "weapon_cores.ron";
pub const ARMOURS: &str = "armours.ron";
pub const ARMOUR_MODS: &str = "armour_mods.ron";
pub const TYPE_LOCKS: &str = "type_locks.ron";
