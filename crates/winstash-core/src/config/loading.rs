//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::defaults::config_file_path;
use crate::config::types::WinstashConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load `~/.winstash/config.toml`.
///
/// A missing file yields the default configuration. Parse and validation
/// failures are returned as errors.
pub fn load_user_config() -> Result<WinstashConfig, ConfigError> {
    let path = config_file_path();
    let config = match load_config_file(&path) {
        Ok(config) => config,
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                event = "core.config.not_found",
                path = %path.display(),
                "No config file, using defaults"
            );
            WinstashConfig::default()
        }
        Err(e) => return Err(e),
    };

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<WinstashConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[capture]
overwrite = false

[restore]
timeout_secs = 3
poll_interval_ms = 50

[storage]
path = "/tmp/winstash-test.json"
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert!(!config.capture.overwrite());
        assert_eq!(config.restore.timeout(), Duration::from_secs(3));
        assert_eq!(config.restore.poll_interval(), Duration::from_millis(50));
        assert_eq!(
            config.storage.path.as_deref(),
            Some(Path::new("/tmp/winstash-test.json"))
        );
    }

    #[test]
    fn test_load_config_file_missing_is_io_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_file(&dir.path().join("missing.toml"));
        match result {
            Err(ConfigError::IoError { source }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected IoError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "invalid toml [[[").unwrap();

        let result = load_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
