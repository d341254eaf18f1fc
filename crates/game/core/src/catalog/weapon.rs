//! Base weapon definitions.

use bitflags::bitflags;

bitflags! {
    /// Capability flags that change how a weapon fires.
    ///
    /// Continuous-beam (`LASER`) and area-cone (`FLAMETHROWER`) weapons have a
    /// different stat shape from projectile weapons and are type-locked.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct WeaponTraits: u8 {
        const LASER        = 1 << 0;
        const FLAMETHROWER = 1 << 1;
        const RAILGUN      = 1 << 2;
        const MINIGUN      = 1 << 3;
    }
}

/// What a weapon launches.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProjectileKind {
    /// Plain bullets, pellets, beams and flames.
    #[default]
    None,
    /// Unguided explosive rocket.
    Rocket,
    /// Rocket steered towards the cursor.
    Guided,
    /// Rocket that acquires its own target.
    Smart,
}

impl ProjectileKind {
    /// Whether the projectile explodes on impact.
    pub const fn is_explosive(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Immutable base stats of a weapon, created once when the catalog is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub damage: u32,
    /// Milliseconds between shots.
    pub fire_interval_ms: u32,
    pub projectile_speed: u32,
    pub pellets: u32,
    /// Spread in degrees when firing from rest.
    pub spread_deg: f32,
    /// Upper bound the spread may bloom to while firing.
    pub max_spread_deg: f32,
    pub mag_size: u32,
    pub reload_ms: u32,
    /// Opaque shop gating data, carried through untouched.
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: WeaponTraits,
    #[cfg_attr(feature = "serde", serde(default))]
    pub projectile: ProjectileKind,
}

impl WeaponDefinition {
    pub fn is_laser(&self) -> bool {
        self.traits.contains(WeaponTraits::LASER)
    }

    pub fn is_flamethrower(&self) -> bool {
        self.traits.contains(WeaponTraits::FLAMETHROWER)
    }

    pub fn is_railgun(&self) -> bool {
        self.traits.contains(WeaponTraits::RAILGUN)
    }

    pub fn is_minigun(&self) -> bool {
        self.traits.contains(WeaponTraits::MINIGUN)
    }

    /// Creates a builder seeded with neutral stats.
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> WeaponDefinitionBuilder {
        WeaponDefinitionBuilder::new(id, name)
    }
}

/// Builder for constructing weapon definitions in code.
#[derive(Clone, Debug)]
pub struct WeaponDefinitionBuilder {
    definition: WeaponDefinition,
}

impl WeaponDefinitionBuilder {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            definition: WeaponDefinition {
                id: id.into(),
                name: name.into(),
                description: String::new(),
                damage: 10,
                fire_interval_ms: 250,
                projectile_speed: 900,
                pellets: 1,
                spread_deg: 2.0,
                max_spread_deg: 6.0,
                mag_size: 12,
                reload_ms: 1000,
                price: 0,
                traits: WeaponTraits::empty(),
                projectile: ProjectileKind::None,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.definition.description = description.into();
        self
    }

    pub fn damage(mut self, damage: u32) -> Self {
        self.definition.damage = damage;
        self
    }

    pub fn fire_interval_ms(mut self, ms: u32) -> Self {
        self.definition.fire_interval_ms = ms;
        self
    }

    pub fn projectile_speed(mut self, speed: u32) -> Self {
        self.definition.projectile_speed = speed;
        self
    }

    pub fn pellets(mut self, pellets: u32) -> Self {
        self.definition.pellets = pellets;
        self
    }

    pub fn spread(mut self, base_deg: f32, max_deg: f32) -> Self {
        self.definition.spread_deg = base_deg;
        self.definition.max_spread_deg = max_deg;
        self
    }

    pub fn mag_size(mut self, mag_size: u32) -> Self {
        self.definition.mag_size = mag_size;
        self
    }

    pub fn reload_ms(mut self, ms: u32) -> Self {
        self.definition.reload_ms = ms;
        self
    }

    pub fn price(mut self, price: u32) -> Self {
        self.definition.price = price;
        self
    }

    pub fn traits(mut self, traits: WeaponTraits) -> Self {
        self.definition.traits = traits;
        self
    }

    pub fn projectile(mut self, projectile: ProjectileKind) -> Self {
        self.definition.projectile = projectile;
        self
    }

    pub fn build(self) -> WeaponDefinition {
        self.definition
    }
}
