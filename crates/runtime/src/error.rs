//! Errors surfaced by the runtime API.
//!
//! Composition itself never fails; these cover building an [`Armory`](crate::Armory)
//! and reading or writing save files.

use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Content files could not be read or parsed.
    #[error("failed to load content: {0}")]
    Content(String),
}
