//! Inspection commands. Each prints one JSON document to the given writer.

use std::io::Write;

use anyhow::{Context, Result};
use armory_core::PersistedState;
use armory_runtime::{Armory, FileSaveRepository, SaveRepository};
use clap::Subcommand;
use serde_json::json;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Effective stats for one weapon under the saved build
    Weapon {
        /// Weapon id (unknown ids resolve to the default weapon)
        #[arg(value_name = "WEAPON")]
        id: String,
    },

    /// Player-wide effects and armour stats from the equipped armour
    Effects,

    /// Every weapon plus the armour views
    Summary,

    /// Mods and cores the shop offers for a weapon
    Shop {
        #[arg(value_name = "WEAPON")]
        weapon: String,
    },
}

impl Command {
    pub fn execute(
        &self,
        armory: &Armory,
        repository: &FileSaveRepository,
        out: impl Write,
    ) -> Result<()> {
        let state = load_state(repository)?;
        let document = match self {
            Command::Weapon { id } => serde_json::to_value(armory.effective_weapon(&state, id))?,
            Command::Effects => json!({
                "effects": armory.player_effects(&state),
                "armour": armory.armour_stats(&state),
            }),
            Command::Summary => serde_json::to_value(armory.summary(&state))?,
            Command::Shop { weapon } => json!({
                "weapon": armory.catalog().weapon(weapon).id,
                "mods": armory.legal_mods(weapon),
                "cores": armory.legal_cores(weapon),
            }),
        };
        write_json(out, &document)
    }
}

fn load_state(repository: &FileSaveRepository) -> Result<PersistedState> {
    repository
        .load()
        .with_context(|| format!("Failed to load save: {}", repository.path().display()))
}

fn write_json(mut out: impl Write, document: &serde_json::Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, document)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Command, save: &str) -> serde_json::Value {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armory.json");
        std::fs::write(&path, save).unwrap();

        let armory = Armory::builtin().unwrap();
        let mut out = Vec::new();
        command
            .execute(&armory, &FileSaveRepository::new(&path), &mut out)
            .unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn weapon_prints_effective_stats() {
        let value = run(
            Command::Weapon { id: "smg".into() },
            r#"{ "weaponBuilds": { "smg": { "mods": ["dmg_10"] } } }"#,
        );
        assert_eq!(value["id"], "smg");
        assert_eq!(value["damage"], 11);
    }

    #[test]
    fn effects_reads_armour() {
        let value = run(
            Command::Effects,
            r#"{ "armour": { "mods": ["plating_hp40"] } }"#,
        );
        assert_eq!(value["effects"]["bonusHp"], 40);
        assert_eq!(value["effects"]["dashRegenMs"], 2000);
    }

    #[test]
    fn shop_lists_type_locked_options() {
        let value = run(Command::Shop { weapon: "laser".into() }, "{}");
        let mods: Vec<&str> = value["mods"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|m| m["id"].as_str())
            .collect();
        assert_eq!(mods, ["dmg_10", "beam_focus", "heat_sink"]);
        assert_eq!(value["cores"][0]["id"], "core_prism");
    }

    #[test]
    fn missing_save_prints_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let armory = Armory::builtin().unwrap();
        let mut out = Vec::new();
        let repository = FileSaveRepository::new(dir.path().join("none.json"));
        Command::Summary
            .execute(&armory, &repository, &mut out)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["weapons"]["pistol"]["damage"], 12);
    }
}
