//! Small in-code catalog shared by unit tests.

use crate::catalog::{
    ArmourDefinition, ArmourIntrinsics, ArmourModDefinition, Catalog, ModClass, TypeLock,
    WeaponCoreDefinition, WeaponDefinition, WeaponModDefinition, WeaponTraits,
};
use crate::effect::{ArmourStatEffect, PlayerEffectOp, WeaponEffect, WeaponEffects, WeaponFilter};
use crate::effective::{DamageOverTime, SpecialBehavior};

fn weapon_mod(
    id: &str,
    class: ModClass,
    applies_to: WeaponFilter,
    ops: impl IntoIterator<Item = WeaponEffect>,
) -> WeaponModDefinition {
    WeaponModDefinition {
        id: Some(id.to_string()),
        name: id.to_string(),
        class,
        applies_to,
        effects: ops.into_iter().collect::<WeaponEffects>(),
        ..WeaponModDefinition::empty()
    }
}

fn weapon_core(
    id: &str,
    only_for: Option<&str>,
    applies_to: WeaponFilter,
    ops: impl IntoIterator<Item = WeaponEffect>,
) -> WeaponCoreDefinition {
    WeaponCoreDefinition {
        id: Some(id.to_string()),
        name: id.to_string(),
        only_for: only_for.map(str::to_string),
        applies_to,
        effects: ops.into_iter().collect(),
        ..WeaponCoreDefinition::empty()
    }
}

fn flamethrowers() -> WeaponFilter {
    WeaponFilter::WithTraits(WeaponTraits::FLAMETHROWER)
}

/// pistol (default), rifle, flamer; a cone type-lock on flamethrowers; three armour
/// mods (two touching dash regen) and one non-default armour.
pub(crate) fn fixture_catalog() -> Catalog {
    use ModClass::{General, Magazine};
    use WeaponFilter::Any;

    Catalog::builder()
        .weapon(WeaponDefinition::builder("pistol", "Pistol").build())
        .weapon(
            WeaponDefinition::builder("rifle", "Rifle")
                .damage(20)
                .fire_interval_ms(200)
                .mag_size(10)
                .reload_ms(1000)
                .build(),
        )
        .weapon(
            WeaponDefinition::builder("flamer", "Flamer")
                .damage(4)
                .fire_interval_ms(50)
                .mag_size(100)
                .traits(WeaponTraits::FLAMETHROWER)
                .build(),
        )
        .weapon_mod(weapon_mod("dmg_10", General, Any, [WeaponEffect::DamagePercent(10)]))
        .weapon_mod(weapon_mod("rapid_fire", General, Any, [WeaponEffect::FireIntervalPercent(-15)]))
        .weapon_mod(weapon_mod("rapid_fire_2", General, Any, [WeaponEffect::FireIntervalPercent(-15)]))
        .weapon_mod(weapon_mod(
            "mag_quickload",
            Magazine,
            Any,
            [WeaponEffect::MagazinePercent(10), WeaponEffect::ReloadPercent(-30)],
        ))
        .weapon_mod(weapon_mod("mag_extended", Magazine, Any, [WeaponEffect::MagazinePercent(30)]))
        .weapon_mod(weapon_mod(
            "fuel_tank",
            Magazine,
            flamethrowers(),
            [WeaponEffect::MagazinePercent(50)],
        ))
        .weapon_mod(weapon_mod(
            "napalm",
            General,
            flamethrowers(),
            [WeaponEffect::DamageOverTime(DamageOverTime { per_tick: 2, ticks: 4 })],
        ))
        .weapon_core(weapon_core(
            "core_pierce",
            Some("rifle"),
            Any,
            [
                WeaponEffect::Special(SpecialBehavior::Pierce { targets: 3 }),
                WeaponEffect::DamagePercent(50),
            ],
        ))
        .weapon_core(weapon_core(
            "core_inferno",
            None,
            flamethrowers(),
            [
                WeaponEffect::SpreadPercent(20),
                WeaponEffect::DamageOverTime(DamageOverTime { per_tick: 3, ticks: 6 }),
            ],
        ))
        .weapon_core(weapon_core(
            "core_overclock",
            None,
            WeaponFilter::ballistic(),
            [WeaponEffect::FireIntervalPercent(-10)],
        ))
        .armour(ArmourDefinition {
            id: Some("sprinter".to_string()),
            name: "Sprinter".to_string(),
            intrinsics: ArmourIntrinsics {
                move_speed_mult: 1.2,
                dash_regen_cap_ms: Some(1000),
                ..ArmourIntrinsics::default()
            },
            ..ArmourDefinition::standard_issue()
        })
        .armour_mod(ArmourModDefinition {
            id: Some("plating_40".to_string()),
            name: "Plating".to_string(),
            stats: [ArmourStatEffect::MaxHp(40), ArmourStatEffect::MoveSpeedPercent(-10)]
                .into_iter()
                .collect(),
            effects: [PlayerEffectOp::BonusHp(40), PlayerEffectOp::MoveSpeedMult(0.9)]
                .into_iter()
                .collect(),
            ..ArmourModDefinition::empty()
        })
        .armour_mod(ArmourModDefinition {
            id: Some("dash_coil".to_string()),
            name: "Dash Coil".to_string(),
            stats: [ArmourStatEffect::DashRegenPercent(-25)].into_iter().collect(),
            effects: [PlayerEffectOp::DashRegenPercent(-25)].into_iter().collect(),
            ..ArmourModDefinition::empty()
        })
        .armour_mod(ArmourModDefinition {
            id: Some("dash_trim".to_string()),
            name: "Dash Trim".to_string(),
            stats: [ArmourStatEffect::DashRegenPercent(-20)].into_iter().collect(),
            effects: [PlayerEffectOp::DashRegenPercent(-20)].into_iter().collect(),
            ..ArmourModDefinition::empty()
        })
        .type_lock(TypeLock {
            name: "cone".to_string(),
            weapons: flamethrowers(),
            allowed_mods: vec!["dmg_10".into(), "fuel_tank".into(), "napalm".into()],
            core: Some("core_inferno".to_string()),
        })
        .build()
        .expect("fixture catalog is valid")
}
