//! JSON snapshot persistence for the schedule state.
//!
//! The whole [`ScheduleState`] is stored as one document at
//! `~/.config/scheduly/state.json` and restored verbatim. A missing file
//! is first-run, not an error.

use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};
use crate::state::ScheduleState;

/// Store for the persisted schedule state.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Open the store at the default location.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: super::data_dir()?.join("state.json"),
        })
    }

    /// Open a store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, or `None` when nothing was saved yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<ScheduleState>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.load_error(e).into()),
        };
        let state = serde_json::from_str(&content).map_err(|e| self.load_error(e))?;
        Ok(Some(state))
    }

    /// Persist the state, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the state cannot be serialized or written.
    pub fn save(&self, state: &ScheduleState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.save_error(e))?;
        }
        let content = serde_json::to_string_pretty(state).map_err(|e| self.save_error(e))?;
        std::fs::write(&self.path, content).map_err(|e| self.save_error(e))?;
        Ok(())
    }

    fn load_error(&self, e: impl std::fmt::Display) -> StorageError {
        StorageError::LoadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }

    fn save_error(&self, e: impl std::fmt::Display) -> StorageError {
        StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}
