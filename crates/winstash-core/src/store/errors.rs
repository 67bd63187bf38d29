use crate::errors::WinstashError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Workspace '{name}' not found")]
    WorkspaceNotFound { name: String },

    #[error("Failed to save workspaces to '{path}': {message}")]
    SaveFailed { path: String, message: String },
}

impl WinstashError for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            StoreError::WorkspaceNotFound { .. } => "WORKSPACE_NOT_FOUND",
            StoreError::SaveFailed { .. } => "STORE_SAVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, StoreError::WorkspaceNotFound { .. })
    }
}
