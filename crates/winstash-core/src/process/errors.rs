use crate::errors::WinstashError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Process '{pid}' not found")]
    NotFound { pid: u32 },

    #[error("Executable path of process '{pid}' is unavailable")]
    ExecutableUnavailable { pid: u32 },

    #[error("Working directory of process '{pid}' is unavailable")]
    CwdUnavailable { pid: u32 },

    #[error("Empty command line")]
    EmptyCommand,

    #[error("Failed to launch '{program}': {message}")]
    SpawnFailed { program: String, message: String },
}

impl WinstashError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::NotFound { .. } => "PROCESS_NOT_FOUND",
            ProcessError::ExecutableUnavailable { .. } => "PROCESS_EXECUTABLE_UNAVAILABLE",
            ProcessError::CwdUnavailable { .. } => "PROCESS_CWD_UNAVAILABLE",
            ProcessError::EmptyCommand => "PROCESS_EMPTY_COMMAND",
            ProcessError::SpawnFailed { .. } => "PROCESS_SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ProcessError::EmptyCommand | ProcessError::SpawnFailed { .. }
        )
    }
}
