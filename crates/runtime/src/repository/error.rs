//! Error types raised by save repository implementations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by save repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save file {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode save data")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
