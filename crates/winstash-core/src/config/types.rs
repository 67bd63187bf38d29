//! Configuration type definitions.
//!
//! These types are deserialized from `~/.winstash/config.toml`. Every field is
//! optional in the file; accessors supply the defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::defaults;

/// Main configuration loaded from the TOML config file.
///
/// Passed explicitly into the capture and restore engines.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WinstashConfig {
    #[serde(default)]
    pub capture: CaptureConfig,

    #[serde(default)]
    pub restore: RestoreConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Capture behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CaptureConfig {
    /// Replace an existing workspace of the same name without asking.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

impl CaptureConfig {
    pub fn overwrite(&self) -> bool {
        self.overwrite.unwrap_or(defaults::DEFAULT_OVERWRITE)
    }
}

/// Restore behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RestoreConfig {
    /// Seconds to wait for a relaunched program to open its window.
    /// Default: 20 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Interval between window list polls while waiting.
    /// Default: 100ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,

    /// Close terminal windows that were open before the restore started.
    #[serde(default)]
    pub close_terminal: bool,
}

impl RestoreConfig {
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(defaults::DEFAULT_TIMEOUT_SECS)
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
            .unwrap_or(defaults::DEFAULT_POLL_INTERVAL_MS)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms())
    }
}

/// Where the workspace document lives.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Override for the workspace store file.
    /// Default: `~/.winstash/workspaces.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
