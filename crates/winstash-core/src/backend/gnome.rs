//! GNOME Shell backend driven through the `gdbus` CLI.

use std::process::Command;

use tracing::{debug, info, warn};

use super::errors::BackendError;
use super::protocol::{self, Method, Param};
use super::traits::WindowBackend;
use super::types::{WindowAction, WindowDetails, WindowId, WindowRecord};

/// Talks to the "Windows" GNOME Shell extension.
///
/// Every call is a blocking child process with no timeout of its own.
#[derive(Debug, Clone)]
pub struct GnomeShellBackend {
    program: String,
}

impl Default for GnomeShellBackend {
    fn default() -> Self {
        Self::with_program(protocol::COMMAND_PREFIX[0])
    }
}

impl GnomeShellBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `program` in place of `gdbus`; the rest of the argv is unchanged.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check whether the backend program is on PATH.
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    /// Fail early with [`BackendError::Unavailable`] when the program is missing.
    pub fn ensure_available(&self) -> Result<(), BackendError> {
        if self.is_available() {
            return Ok(());
        }
        warn!(event = "core.backend.unavailable", program = %self.program);
        Err(BackendError::Unavailable {
            program: self.program.clone(),
            message: "not found on PATH (gdbus ships with GLib)".to_string(),
        })
    }

    fn argv(&self, method: Method, params: &[Param]) -> Vec<String> {
        let mut argv = protocol::build_command(method, params);
        argv[0] = self.program.clone();
        argv
    }

    fn query(&self, method: Method, params: &[Param]) -> Result<String, BackendError> {
        let argv = self.argv(method, params);
        debug!(event = "core.backend.query_started", method = %method);

        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .output()
            .map_err(|e| BackendError::Unavailable {
                program: argv[0].clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.backend.query_failed",
                method = %method,
                stderr = %stderr.trim()
            );
            return Err(BackendError::CommandFailed {
                method: method.to_string(),
                message: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl WindowBackend for GnomeShellBackend {
    fn name(&self) -> &'static str {
        "gnome-shell"
    }

    fn list_windows(&self) -> Result<Vec<WindowRecord>, BackendError> {
        let text = self.query(Method::List, &[])?;
        let windows = protocol::parse_window_list(&text)?;
        debug!(event = "core.backend.list_completed", count = windows.len());
        Ok(windows)
    }

    fn get_details(&self, id: WindowId) -> Result<WindowDetails, BackendError> {
        let text = self.query(Method::Details, &[id.into()])?;
        protocol::parse_window_details(&text)
    }

    fn perform(&self, action: WindowAction) {
        let method = action.method();
        let argv = self.argv(method, &action.params());

        // Output and exit status are discarded.
        match Command::new(&argv[0]).args(&argv[1..]).output() {
            Ok(_) => info!(
                event = "core.backend.action_sent",
                method = %method,
                window_id = action.window_id()
            ),
            Err(e) => warn!(
                event = "core.backend.action_failed",
                method = %method,
                window_id = action.window_id(),
                error = %e
            ),
        }
    }
}
