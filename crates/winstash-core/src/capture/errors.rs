use crate::backend::BackendError;
use crate::errors::WinstashError;
use crate::process::ProcessError;
use crate::selector::SelectorError;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Workspace name must not be empty")]
    InvalidName,

    #[error("Selector returned {got} choices for {expected} windows")]
    SelectionMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WinstashError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::InvalidName => "CAPTURE_INVALID_NAME",
            CaptureError::SelectionMismatch { .. } => "CAPTURE_SELECTION_MISMATCH",
            CaptureError::Backend(e) => e.error_code(),
            CaptureError::Selector(e) => e.error_code(),
            CaptureError::Store(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            CaptureError::InvalidName => true,
            CaptureError::Backend(e) => e.is_user_error(),
            CaptureError::SelectionMismatch { .. }
            | CaptureError::Selector(_)
            | CaptureError::Store(_) => false,
        }
    }
}

/// Why a single window could not be captured. Never aborts the capture.
#[derive(Debug, thiserror::Error)]
pub enum WindowCaptureError {
    #[error("window has no owning process")]
    MissingPid,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Process(#[from] ProcessError),
}
