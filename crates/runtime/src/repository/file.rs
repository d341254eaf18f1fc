//! File-based SaveRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use armory_core::PersistedState;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// File-based implementation of SaveRepository.
///
/// Stores the persisted state as a single pretty-printed JSON document, in the
/// camelCase shape external save systems use (`weaponBuilds`, `armour`,
/// `dashRegenMs`). Writes go to a temp file first and are renamed into place.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Create a repository over a save file path. The file need not exist yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveRepository for FileSaveRepository {
    fn load(&self) -> Result<PersistedState> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("no save at {}, using default state", self.path.display());
                return Ok(PersistedState::default());
            }
            Err(e) => return Err(RepositoryError::Io(e)),
        };

        let state: PersistedState =
            serde_json::from_slice(&bytes).map_err(|source| RepositoryError::Decode {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Loaded save from {} ({} weapon builds)",
            self.path.display(),
            state.weapon_builds.len()
        );

        Ok(state)
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec_pretty(state).map_err(RepositoryError::Encode)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::info!("Saved build selections to {}", self.path.display());

        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
