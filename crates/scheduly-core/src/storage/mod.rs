mod snapshot;

pub use snapshot::SnapshotStore;

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns `~/.config/scheduly[-dev]/` based on SCHEDULY_ENV.
///
/// Set SCHEDULY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SCHEDULY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("scheduly-dev")
    } else {
        base_dir.join("scheduly")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
