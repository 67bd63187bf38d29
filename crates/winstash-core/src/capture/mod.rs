pub mod errors;
pub mod handler;
pub mod types;

pub use errors::{CaptureError, WindowCaptureError};
pub use handler::CaptureEngine;
pub use types::{CaptureOutcome, CaptureReport, CaptureRequest, SkippedWindow};
