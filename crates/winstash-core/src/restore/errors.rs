use crate::errors::WinstashError;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WinstashError for RestoreError {
    fn error_code(&self) -> &'static str {
        match self {
            RestoreError::Store(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            RestoreError::Store(e) => e.is_user_error(),
        }
    }
}
