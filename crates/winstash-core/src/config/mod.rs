//! # Configuration System
//!
//! TOML configuration for winstash.
//!
//! Configuration is resolved in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.winstash/config.toml`
//! 3. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.winstash/config.toml
//! [capture]
//! overwrite = false
//!
//! [restore]
//! timeout_secs = 30
//! close_terminal = true
//!
//! [storage]
//! path = "/home/me/.local/share/winstash/workspaces.json"
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{CaptureConfig, RestoreConfig, StorageConfig, WinstashConfig};
pub use validation::validate_config;

impl WinstashConfig {
    /// Load the user configuration, falling back to defaults when no file exists.
    ///
    /// See [`loading::load_user_config`] for details.
    pub fn load() -> Result<Self, crate::errors::ConfigError> {
        loading::load_user_config()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
