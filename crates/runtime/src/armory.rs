//! High-level equipment service.
//!
//! [`Armory`] owns the catalog and engine config and answers the questions the
//! game loop and shop UI ask every frame. It is cheap to clone and share: the
//! catalog sits behind an `Arc` and the engine holds no other state.

use std::path::PathBuf;
use std::sync::Arc;

use armory_content::{BuiltinContent, ContentFactory};
use armory_core::{
    CatalogOracle, EffectiveArmourStats, EffectiveWeapon, EngineConfig, LoadoutEngine,
    PersistedState, PlayerEffects, WeaponCoreDefinition, WeaponModDefinition, legal_cores,
    legal_mods,
};

use crate::error::{Result, RuntimeError};
use crate::repository::SaveRepository;
use crate::summary::LoadoutSummary;

/// Read-only equipment service over a shared catalog.
#[derive(Clone)]
pub struct Armory {
    catalog: Arc<dyn CatalogOracle>,
    config: EngineConfig,
}

impl Armory {
    /// Create a new armory builder.
    pub fn builder() -> ArmoryBuilder {
        ArmoryBuilder::new()
    }

    /// An armory over the content embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::builder().build()
    }

    pub fn catalog(&self) -> &dyn CatalogOracle {
        self.catalog.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Engine façade borrowing this armory's catalog and config.
    pub fn engine(&self) -> LoadoutEngine<'_, dyn CatalogOracle> {
        LoadoutEngine::new(self.catalog.as_ref(), &self.config)
    }

    /// Effective weapon for `weapon_id` under the persisted build.
    ///
    /// Unknown ids resolve to the catalog's default weapon; nothing here fails.
    pub fn effective_weapon(&self, state: &PersistedState, weapon_id: &str) -> EffectiveWeapon {
        self.engine().effective_weapon(state, weapon_id)
    }

    /// Player-wide effects from the equipped armour.
    pub fn player_effects(&self, state: &PersistedState) -> PlayerEffects {
        self.engine().player_effects(state)
    }

    /// Armour-sheet view of the equipped armour mods.
    pub fn armour_stats(&self, state: &PersistedState) -> EffectiveArmourStats {
        self.engine().armour_stats(state)
    }

    /// Mods the shop should offer for a weapon.
    pub fn legal_mods(&self, weapon_id: &str) -> Vec<&WeaponModDefinition> {
        let base = self.catalog.weapon(weapon_id);
        legal_mods(self.catalog.as_ref(), base)
    }

    /// Cores the shop should offer for a weapon.
    pub fn legal_cores(&self, weapon_id: &str) -> Vec<&WeaponCoreDefinition> {
        let base = self.catalog.weapon(weapon_id);
        legal_cores(self.catalog.as_ref(), base)
    }

    /// Every weapon in the catalog composed under `state`, plus armour views.
    pub fn summary(&self, state: &PersistedState) -> LoadoutSummary {
        let engine = self.engine();
        let weapons = self
            .catalog
            .weapons()
            .iter()
            .map(|weapon| (weapon.id.clone(), engine.effective_weapon(state, &weapon.id)))
            .collect();

        LoadoutSummary {
            weapons,
            armour: engine.armour_stats(state),
            effects: engine.player_effects(state),
        }
    }

    /// Loads the save from `repository` and summarizes it.
    pub fn summarize_save(&self, repository: &dyn SaveRepository) -> Result<LoadoutSummary> {
        let state = repository.load()?;
        Ok(self.summary(&state))
    }
}

/// Where the builder takes its catalog from.
enum CatalogSource {
    Builtin,
    DataDir(PathBuf),
    Provided(Arc<dyn CatalogOracle>),
}

/// Builder for [`Armory`] with flexible content sources.
pub struct ArmoryBuilder {
    source: CatalogSource,
    config: Option<EngineConfig>,
}

impl ArmoryBuilder {
    fn new() -> Self {
        Self {
            source: CatalogSource::Builtin,
            config: None,
        }
    }

    /// Load catalog tables (and `config.toml`, unless overridden) from a directory.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source = CatalogSource::DataDir(dir.into());
        self
    }

    /// Use an already-built catalog.
    pub fn catalog(mut self, catalog: impl CatalogOracle + 'static) -> Self {
        self.source = CatalogSource::Provided(Arc::new(catalog));
        self
    }

    /// Use a catalog shared with other services.
    pub fn shared_catalog(mut self, catalog: Arc<dyn CatalogOracle>) -> Self {
        self.source = CatalogSource::Provided(catalog);
        self
    }

    /// Override engine configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the armory
    pub fn build(self) -> Result<Armory> {
        let (catalog, file_config): (Arc<dyn CatalogOracle>, Option<EngineConfig>) =
            match self.source {
                CatalogSource::Provided(catalog) => (catalog, None),
                CatalogSource::Builtin => {
                    let catalog = BuiltinContent::catalog().map_err(content)?;
                    let config = BuiltinContent::config().map_err(content)?;
                    (Arc::new(catalog) as Arc<dyn CatalogOracle>, Some(config))
                }
                CatalogSource::DataDir(dir) => {
                    let factory = ContentFactory::new(dir);
                    let catalog = factory.load_catalog().map_err(content)?;
                    let config = factory.load_config().map_err(content)?;
                    (Arc::new(catalog) as Arc<dyn CatalogOracle>, Some(config))
                }
            };

        let config = self.config.or(file_config).unwrap_or_default();
        tracing::info!(
            "armory ready: {} weapons, default dash regen {}ms",
            catalog.weapons().len(),
            config.default_dash_regen_ms
        );

        Ok(Armory { catalog, config })
    }
}

fn content(error: impl std::fmt::Display) -> RuntimeError {
    RuntimeError::Content(format!("{:#}", error))
}
