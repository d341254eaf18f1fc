/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Dash recharge time used when the persisted state does not carry one.
    pub default_dash_regen_ms: u32,
}

impl EngineConfig {
    // ===== compile-time constants used as type parameters =====
    /// Mod slots on every weapon build.
    pub const WEAPON_MOD_SLOTS: usize = 3;
    /// Mod slots on the equipped armour.
    pub const ARMOUR_MOD_SLOTS: usize = 2;
    /// Effect operations a single catalog entry may carry.
    pub const MAX_EFFECTS: usize = 8;

    // ===== clamps applied by transforms =====
    pub const MIN_FIRE_INTERVAL_MS: u32 = 20;
    pub const MIN_RELOAD_MS: u32 = 100;
    pub const MIN_DASH_REGEN_MS: u32 = 250;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DASH_REGEN_MS: u32 = 2000;

    pub fn new() -> Self {
        Self {
            default_dash_regen_ms: Self::DEFAULT_DASH_REGEN_MS,
        }
    }

    pub fn with_default_dash_regen_ms(default_dash_regen_ms: u32) -> Self {
        Self {
            default_dash_regen_ms,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
