//! Workspace document persistence.
//!
//! The document is read whole and written whole. Writes go through a temp
//! file and a rename. There is no locking: concurrent invocations race and
//! the last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StorageConfig;
use crate::config::defaults::default_store_file_path;
use crate::store::errors::StoreError;
use crate::store::types::WorkspaceStore;

/// Environment override for the store location, mainly for tests.
pub const STORE_FILE_ENV: &str = "WINSTASH_STORE_FILE";

/// Resolve the store location: env override, then config, then `~/.winstash/workspaces.json`.
pub fn store_file_path(storage: &StorageConfig) -> PathBuf {
    if let Ok(path_str) = std::env::var(STORE_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    storage
        .path
        .clone()
        .unwrap_or_else(default_store_file_path)
}

/// Load the workspace document.
///
/// Returns an empty store if the file doesn't exist, can't be read, or is
/// corrupted. Corruption is logged, never returned.
pub fn load_store(path: &Path) -> WorkspaceStore {
    if !path.exists() {
        return WorkspaceStore::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(
                    event = "core.store.json_parse_failed",
                    path = %path.display(),
                    error = %e,
                    "Workspace file exists but contains invalid JSON - starting from an empty store"
                );
                WorkspaceStore::default()
            }
        },
        Err(e) => {
            tracing::error!(
                event = "core.store.load_failed",
                path = %path.display(),
                error = %e
            );
            WorkspaceStore::default()
        }
    }
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.store.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err
        );
    }
}

/// Write the whole document atomically.
pub fn save_store(path: &Path, store: &WorkspaceStore) -> Result<(), StoreError> {
    let save_failed = |message: String| StoreError::SaveFailed {
        path: path.display().to_string(),
        message,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            save_failed(format!(
                "Failed to create directory ({}): {}",
                parent.display(),
                e
            ))
        })?;
    }

    let json = serde_json::to_string_pretty(store)
        .map_err(|e| save_failed(format!("Failed to serialize workspaces: {}", e)))?;

    let temp_file = path.with_extension("json.tmp");

    if let Err(e) = fs::write(&temp_file, &json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(save_failed(e.to_string()));
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(save_failed(e.to_string()));
    }

    tracing::info!(
        event = "core.store.saved",
        path = %path.display(),
        count = store.len()
    );

    Ok(())
}
