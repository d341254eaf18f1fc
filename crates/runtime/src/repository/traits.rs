//! Repository contract for the persisted build selections.

use armory_core::PersistedState;

use super::Result;

/// Storage for the player's persisted build selections.
///
/// Loading never invents errors for absent data: a save that does not exist yet
/// is the default state. Only unreadable or malformed data is an error.
pub trait SaveRepository: Send + Sync {
    /// Load the persisted state, or the default state when nothing was saved.
    fn load(&self) -> Result<PersistedState>;

    /// Replace the persisted state.
    fn save(&self, state: &PersistedState) -> Result<()>;

    /// Check if a save exists.
    fn exists(&self) -> bool;
}
