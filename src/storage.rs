//! Snapshot persistence
//!
//! Snapshots are stored as a single JSON document under a fixed key. On disk
//! that is `<data dir>/wordle-game-storage.json`:
//! - Linux: ~/.local/share/wordle-game/
//! - macOS: ~/Library/Application Support/com.wordle-game.Wordle Game/
//! - Windows: %APPDATA%/wordle-game/Wordle Game/data/

use crate::error::StorageError;
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key the snapshot is stored under
pub const STORAGE_KEY: &str = "wordle-game-storage";

pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORG: &str = "wordle-game";
pub(crate) const APP_NAME: &str = "Wordle Game";

/// Somewhere to keep the serialized snapshot
pub trait SnapshotStore: Send {
    /// Read the stored document, `None` if nothing was saved yet
    ///
    /// # Errors
    /// Returns `StorageError` when the store exists but cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored document
    ///
    /// # Errors
    /// Returns `StorageError` when the document cannot be written.
    fn save(&self, data: &str) -> Result<(), StorageError>;
}

/// Snapshot kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory
    ///
    /// # Errors
    /// Returns `StorageError::NoDataDir` if no home directory can be found.
    pub fn in_data_dir() -> Result<Self, StorageError> {
        let dirs =
            ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join(format!("{STORAGE_KEY}.json"))))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, data: &str) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        // Write a sibling file and rename it over the old snapshot
        let tmp_path = self.path.with_extension("json.tmp");
        let tmp_err = |source| StorageError::Write {
            path: tmp_path.clone(),
            source,
        };
        let mut file = File::create(&tmp_path).map_err(tmp_err)?;
        file.write_all(data.as_bytes()).map_err(tmp_err)?;
        file.sync_all().map_err(tmp_err)?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(write_err)
    }
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `data`
    #[must_use]
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(data.into()))),
        }
    }

    /// Current contents
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn save(&self, data: &str) -> Result<(), StorageError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(data.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_round_trip_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper/state.json"));
        store.save(r#"{"wordLength":6}"#).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some(r#"{"wordLength":6}"#));
    }

    #[test]
    fn save_replaces_snapshot_without_leaving_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = FileStore::new(path.clone());
        store.save(r#"{"wordLength":5}"#).unwrap();
        store.save(r#"{"wordLength":7}"#).unwrap();

        assert_eq!(store.load().unwrap().as_deref(), Some(r#"{"wordLength":7}"#));
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("state.json")]);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file
        let store = FileStore::new(dir.path());
        assert!(matches!(store.load(), Err(StorageError::Read { .. })));
    }

    #[test]
    fn data_dir_path_uses_storage_key() {
        if let Ok(store) = FileStore::in_data_dir() {
            assert!(store.path().ends_with("wordle-game-storage.json"));
        }
    }

    #[test]
    fn memory_store_clones_share_contents() {
        let store = MemoryStore::new();
        let view = store.clone();
        assert!(view.load().unwrap().is_none());
        store.save("{}").unwrap();
        assert_eq!(view.contents().as_deref(), Some("{}"));
        assert_eq!(MemoryStore::with_data("x").contents().as_deref(), Some("x"));
    }
}
