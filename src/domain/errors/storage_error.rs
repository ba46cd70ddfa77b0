//! Roster storage error types.

use thiserror::Error;

/// Roster storage error variants.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read saved roster: {0}")]
    ReadFailed(String),

    #[error("failed to write roster: {0}")]
    WriteFailed(String),

    #[error("saved roster is corrupt: {0}")]
    Corrupt(String),
}
