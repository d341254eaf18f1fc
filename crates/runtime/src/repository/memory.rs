//! In-memory SaveRepository implementation for tests and local runs.

use std::sync::RwLock;

use armory_core::PersistedState;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// In-memory implementation of SaveRepository.
#[derive(Default)]
pub struct InMemorySaveRepo {
    state: RwLock<Option<PersistedState>>,
}

impl InMemorySaveRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an existing save.
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
        }
    }
}

impl SaveRepository for InMemorySaveRepo {
    fn load(&self) -> Result<PersistedState> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(state.clone().unwrap_or_default())
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        let mut slot = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(state.clone());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.state
            .read()
            .map(|state| state.is_some())
            .unwrap_or(false)
    }
}
