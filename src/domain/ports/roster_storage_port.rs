//! Roster storage port definition.

use crate::domain::entities::Roster;
use crate::domain::errors::StorageError;

/// Port for persisting the player roster between sessions.
#[cfg_attr(test, mockall::automock)]
pub trait RosterStoragePort: Send + Sync {
    /// Loads the saved roster; `Ok(None)` when nothing was saved yet.
    fn load_roster(&self) -> Result<Option<Roster>, StorageError>;

    /// Replaces the saved roster.
    fn save_roster(&self, roster: &Roster) -> Result<(), StorageError>;

    /// Forgets the saved roster.
    fn clear_roster(&self) -> Result<(), StorageError>;
}
