//! Session-ending actions run after a capture: close every window, then
//! optionally reboot or power off. Power requests are fire-and-forget.

use std::process::{Command, Stdio};

use tracing::{info, warn};

use crate::backend::{BackendError, WindowBackend};
use crate::errors::WinstashError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalAction {
    CloseWindows,
    Reboot,
    Shutdown,
}

impl FinalAction {
    /// `systemctl` verb for power actions.
    fn systemctl_verb(&self) -> Option<&'static str> {
        match self {
            FinalAction::CloseWindows => None,
            FinalAction::Reboot => Some("reboot"),
            FinalAction::Shutdown => Some("poweroff"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PowerError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Failed to request '{verb}': {message}")]
    RequestFailed { verb: String, message: String },
}

impl WinstashError for PowerError {
    fn error_code(&self) -> &'static str {
        match self {
            PowerError::Backend(e) => e.error_code(),
            PowerError::RequestFailed { .. } => "POWER_REQUEST_FAILED",
        }
    }
}

/// Close every open window. Returns how many close requests were sent.
pub fn close_all_windows(backend: &dyn WindowBackend) -> Result<usize, BackendError> {
    let windows = backend.list_windows()?;
    for window in &windows {
        backend.close(window.id);
    }
    info!(event = "core.power.windows_closed", count = windows.len());
    Ok(windows.len())
}

/// Close all windows, then reboot or shut down if asked.
pub fn perform_final_action(
    backend: &dyn WindowBackend,
    action: FinalAction,
) -> Result<usize, PowerError> {
    let closed = close_all_windows(backend)?;

    if let Some(verb) = action.systemctl_verb() {
        info!(event = "core.power.request_started", verb = verb);
        if let Err(e) = Command::new("systemctl")
            .arg(verb)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            warn!(event = "core.power.request_failed", verb = verb, error = %e);
            return Err(PowerError::RequestFailed {
                verb: verb.to_string(),
                message: e.to_string(),
            });
        }
    }

    Ok(closed)
}
