//! Roster persistence adapters.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use super::config::storage::write_atomic;
use crate::domain::entities::Roster;
use crate::domain::errors::StorageError;
use crate::domain::ports::RosterStoragePort;

/// Saves the roster as a JSON list of names in a single file.
#[derive(Debug, Clone)]
pub struct FileRosterStorage {
    path: PathBuf,
}

impl FileRosterStorage {
    /// Creates a store backed by `path`. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStoragePort for FileRosterStorage {
    fn load_roster(&self) -> Result<Option<Roster>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
        };

        let roster: Roster =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        debug!(path = %self.path.display(), players = roster.len(), "Loaded roster");
        Ok(Some(roster))
    }

    fn save_roster(&self, roster: &Roster) -> Result<(), StorageError> {
        let content =
            serde_json::to_vec(roster).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        write_atomic(&self.path, &content).map_err(|e| StorageError::WriteFailed(e.to_string()))
    }

    fn clear_roster(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed(e.to_string())),
        }
    }
}

/// Keeps the roster in memory only; used when persistence is disabled.
#[derive(Debug, Default)]
pub struct MemoryRosterStorage {
    roster: Mutex<Option<Roster>>,
}

impl MemoryRosterStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage holding `roster`.
    #[must_use]
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster: Mutex::new(Some(roster)),
        }
    }

    /// Returns the currently stored roster.
    #[must_use]
    pub fn snapshot(&self) -> Option<Roster> {
        self.roster.lock().clone()
    }
}

impl RosterStoragePort for MemoryRosterStorage {
    fn load_roster(&self) -> Result<Option<Roster>, StorageError> {
        Ok(self.snapshot())
    }

    fn save_roster(&self, roster: &Roster) -> Result<(), StorageError> {
        *self.roster.lock() = Some(roster.clone());
        Ok(())
    }

    fn clear_roster(&self) -> Result<(), StorageError> {
        *self.roster.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_no_roster() {
        let dir = tempdir().unwrap();
        let storage = FileRosterStorage::new(dir.path().join("players.json"));
        assert!(storage.load_roster().unwrap().is_none());
    }

    #[test]
    fn test_round_trip_keeps_order() {
        let dir = tempdir().unwrap();
        let storage = FileRosterStorage::new(dir.path().join("players.json"));
        let roster = Roster::from(vec!["Cid", "Amy", "", "Bo"]);

        storage.save_roster(&roster).unwrap();

        assert_eq!(storage.load_roster().unwrap(), Some(roster));
        let raw = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(raw, r#"["Cid","Amy","","Bo"]"#);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("players.json");
        fs::write(&path, "{not json").unwrap();

        let storage = FileRosterStorage::new(&path);
        assert!(matches!(
            storage.load_roster(),
            Err(StorageError::Corrupt(_))
        ));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("players.json");
        fs::write(&path, r#"{"players":["Amy"]}"#).unwrap();

        let storage = FileRosterStorage::new(&path);
        assert!(matches!(
            storage.load_roster(),
            Err(StorageError::Corrupt(_))
        ));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let storage = FileRosterStorage::new(dir.path().join("players.json"));
        storage.save_roster(&Roster::blank(3)).unwrap();

        storage.clear_roster().unwrap();
        storage.clear_roster().unwrap();

        assert!(storage.load_roster().unwrap().is_none());
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryRosterStorage::new();
        assert!(storage.load_roster().unwrap().is_none());

        storage.save_roster(&Roster::from(vec!["Amy"])).unwrap();
        assert_eq!(storage.snapshot(), Some(Roster::from(vec!["Amy"])));

        storage.clear_roster().unwrap();
        assert!(storage.snapshot().is_none());
    }
}
