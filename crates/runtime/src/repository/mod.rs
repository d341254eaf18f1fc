//! Repository layer for the persisted build selections.
//!
//! Repositories handle data the player CHANGES: chosen mods, cores and armour.
//! Static equipment content is handled by the catalog, not by repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepo;
pub use traits::SaveRepository;
