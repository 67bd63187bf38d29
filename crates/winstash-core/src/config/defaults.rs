//! Default values for configuration fields.

use std::path::PathBuf;

/// Replace same-named workspaces on capture without confirmation.
pub const DEFAULT_OVERWRITE: bool = true;

/// How long restore waits for a relaunched window to appear.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Base directory for winstash data (`~/.winstash`).
///
/// Falls back to `./.winstash` if the home directory cannot be determined.
pub fn winstash_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".winstash"),
        None => {
            tracing::error!(
                event = "core.config.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".winstash")
        }
    }
}

pub fn config_file_path() -> PathBuf {
    winstash_dir().join("config.toml")
}

pub fn default_store_file_path() -> PathBuf {
    winstash_dir().join("workspaces.json")
}
