use crate::backend::WindowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    pub name: String,
    /// Let the operator choose which windows to keep.
    pub manage: bool,
}

impl CaptureRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manage: false,
        }
    }

    pub fn with_manage(mut self, manage: bool) -> Self {
        self.manage = manage;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved { replaced: bool },
    /// An existing workspace was kept because the operator declined to overwrite it.
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedWindow {
    pub window_id: WindowId,
    pub label: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureReport {
    pub name: String,
    pub outcome: CaptureOutcome,
    pub captured: usize,
    pub skipped: Vec<SkippedWindow>,
}

impl CaptureReport {
    pub(crate) fn declined(name: &str) -> Self {
        Self {
            name: name.to_string(),
            outcome: CaptureOutcome::Declined,
            captured: 0,
            skipped: Vec::new(),
        }
    }
}
