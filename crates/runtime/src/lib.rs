//! Runtime services around the equipment composition engine.
//!
//! This crate wires the content loaders, the pure `armory-core` engine and save
//! storage into a small API. Consumers build an [`Armory`] once and query it
//! whenever displayed or combat stats need refreshing.
//!
//! Modules are organized by responsibility:
//! - [`armory`] hosts the service and its builder
//! - [`repository`] loads and stores the persisted build selections
//! - [`summary`] bundles every derived view for one save
pub mod armory;
pub mod error;
pub mod repository;
pub mod summary;

pub use armory::{Armory, ArmoryBuilder};
pub use error::{Result, RuntimeError};
pub use repository::{FileSaveRepository, InMemorySaveRepo, RepositoryError, SaveRepository};
pub use summary::LoadoutSummary;
