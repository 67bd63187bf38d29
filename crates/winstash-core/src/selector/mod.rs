//! Operator selection seam.
//!
//! Capture asks an external, modal selector which windows to keep and whether
//! to overwrite an existing workspace. The CLI supplies a terminal prompt;
//! [`AcceptAll`] answers without asking.

use crate::errors::WinstashError;

#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    #[error("Failed to read selection: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WinstashError for SelectorError {
    fn error_code(&self) -> &'static str {
        match self {
            SelectorError::Io { .. } => "SELECTOR_IO_ERROR",
        }
    }
}

pub trait Selector {
    /// Multi-select over `items`, all initially selected.
    ///
    /// Returns a keep-mask with the same length and order as `items`.
    fn select(&self, items: &[String]) -> Result<Vec<bool>, SelectorError>;

    /// Yes/no question, defaulting to yes.
    fn confirm(&self, message: &str) -> Result<bool, SelectorError>;
}

/// Keeps everything and confirms everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Selector for AcceptAll {
    fn select(&self, items: &[String]) -> Result<Vec<bool>, SelectorError> {
        Ok(vec![true; items.len()])
    }

    fn confirm(&self, _message: &str) -> Result<bool, SelectorError> {
        Ok(true)
    }
}
