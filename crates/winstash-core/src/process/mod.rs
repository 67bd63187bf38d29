pub mod errors;
pub mod operations;
pub mod traits;
pub mod types;

pub use errors::ProcessError;
pub use operations::{resolve_cwd, resolve_executable_path, spawn_detached};
pub use traits::{ProcessControl, SystemProcesses};
pub use types::LaunchSpec;
