//! Configuration validation logic.

use crate::config::types::WinstashConfig;
use crate::errors::ConfigError;

/// Validate a WinstashConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `restore.timeout_secs` must be greater than zero
/// - `restore.poll_interval_ms` must be greater than zero
pub fn validate_config(config: &WinstashConfig) -> Result<(), ConfigError> {
    if config.restore.timeout_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "restore.timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.restore.poll_interval_ms() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "restore.poll_interval_ms must be greater than 0".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&WinstashConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = WinstashConfig::default();
        config.restore.timeout_secs = Some(0);

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = WinstashConfig::default();
        config.restore.poll_interval_ms = Some(0);

        assert!(validate_config(&config).is_err());
    }
}
