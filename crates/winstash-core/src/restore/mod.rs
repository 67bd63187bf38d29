pub mod errors;
pub mod handler;
pub mod reconcile;
pub mod types;

pub use errors::RestoreError;
pub use handler::RestoreEngine;
pub use reconcile::{MatchStrategy, WindowMatch, pick_new_window, wait_for_new_window};
pub use types::{RestoreOptions, RestoreReport, WindowOutcome, WindowRestore};
