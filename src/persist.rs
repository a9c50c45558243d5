//! Snapshot persistence.
//!
//! The whole [`Store`] is written as one JSON document named after a
//! fixed storage key, inside a data directory.  Saving is a best-effort
//! cache for restoring the dashboard between sessions, not a system of
//! record: there is no versioning and no partial-write recovery.

use crate::error::PersistError;
use crate::store::Store;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Key under which the store is persisted.
pub const STORAGE_KEY: &str = "recruitment-storage";

/// Location of the persisted snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    /// Snapshot stored as `<dir>/recruitment-storage.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored snapshot.  Returns `Ok(None)` when none has been
    /// written yet.
    pub fn load(&self) -> Result<Option<Store>, PersistError> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&self.path).map_err(|source| PersistError::Io {
            path: self.path.clone(),
            source,
        })?;
        let store = serde_json::from_str(&data).map_err(|source| PersistError::Json {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "restored store snapshot");
        Ok(Some(store))
    }

    /// Restores the stored snapshot, falling back to `seed` when there is
    /// none or it cannot be read.
    pub fn load_or_else(&self, seed: impl FnOnce() -> Store) -> Store {
        match self.load() {
            Ok(Some(store)) => store,
            Ok(None) => seed(),
            Err(err) => {
                warn!(error = %err, "ignoring unreadable snapshot");
                seed()
            }
        }
    }

    /// Writes `store`, creating the data directory when needed.
    pub fn save(&self, store: &Store) -> Result<(), PersistError> {
        let io_err = |source| PersistError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }
        let data = serde_json::to_string_pretty(store).map_err(|source| PersistError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, data).map_err(io_err)?;
        info!(path = %self.path.display(), "saved store snapshot");
        Ok(())
    }
}
