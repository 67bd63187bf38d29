//! Window backend protocol.
//!
//! Talks to the GNOME Shell "Windows" extension over `gdbus`: builds the
//! invocation argv, runs it, and extracts the JSON payload buried in the
//! textual reply.

pub mod errors;
pub mod gnome;
pub mod protocol;
pub mod traits;
pub mod types;

pub use errors::BackendError;
pub use gnome::GnomeShellBackend;
pub use protocol::{Method, Param, build_command};
pub use traits::WindowBackend;
pub use types::{WindowAction, WindowDetails, WindowId, WindowRecord};
