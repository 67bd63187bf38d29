use std::time::Duration;

use crate::backend::WindowId;
use crate::config::RestoreConfig;
use crate::config::defaults::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS};

/// Timing and cleanup settings for one restore run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreOptions {
    /// How long to wait for each relaunched window.
    pub timeout: Duration,
    pub poll_interval: Duration,
    /// Close terminal windows that were open before the run, once it finishes.
    pub close_terminal: bool,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            close_terminal: false,
        }
    }
}

impl From<&RestoreConfig> for RestoreOptions {
    fn from(config: &RestoreConfig) -> Self {
        Self {
            timeout: config.timeout(),
            poll_interval: config.poll_interval(),
            close_terminal: config.close_terminal,
        }
    }
}

/// What happened to one saved window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowOutcome {
    /// The new window was found and moved into place.
    Placed { window_id: WindowId },
    /// The program started but no new window was identified before the timeout.
    /// It keeps its default placement.
    NotFound,
    /// The program could not be launched.
    SpawnFailed { message: String },
    /// The window list could not be read before launching.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRestore {
    pub key: String,
    pub executable: String,
    pub outcome: WindowOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    pub name: String,
    pub windows: Vec<WindowRestore>,
    pub closed_terminals: Vec<WindowId>,
}

impl RestoreReport {
    pub fn placed_count(&self) -> usize {
        self.windows
            .iter()
            .filter(|w| matches!(w.outcome, WindowOutcome::Placed { .. }))
            .count()
    }
}
