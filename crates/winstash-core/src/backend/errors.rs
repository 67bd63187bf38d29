use crate::errors::WinstashError;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Window backend unavailable: failed to run '{program}': {message}")]
    Unavailable { program: String, message: String },

    #[error("Window backend call '{method}' failed: {message}")]
    CommandFailed { method: String, message: String },

    #[error("Window backend returned no parseable payload for '{method}': {message}")]
    Unparseable { method: String, message: String },
}

impl WinstashError for BackendError {
    fn error_code(&self) -> &'static str {
        match self {
            BackendError::Unavailable { .. } => "BACKEND_UNAVAILABLE",
            BackendError::CommandFailed { .. } => "BACKEND_COMMAND_FAILED",
            BackendError::Unparseable { .. } => "BACKEND_UNPARSEABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        // gdbus missing or the shell extension not installed
        matches!(
            self,
            BackendError::Unavailable { .. } | BackendError::CommandFailed { .. }
        )
    }
}
