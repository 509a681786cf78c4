//! Configuration validation.

use super::types::ServerConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(u16),

    #[error("Audit API prefix must start with '/': {0}")]
    InvalidApiPrefix(String),

    #[error("Audit buffer size must be greater than zero")]
    InvalidAuditBuffer,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Request body limit must be greater than zero")]
    InvalidBodyLimit,
}

/// Validate server configuration.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate port
    if config.server.port == 0 {
        errors.push(ConfigError::InvalidPort(0));
    }

    // Validate body limit
    if config.server.body_limit_bytes == 0 {
        errors.push(ConfigError::InvalidBodyLimit);
    }

    // Validate audit settings
    if !config.audit.api_prefix.starts_with('/') {
        errors.push(ConfigError::InvalidApiPrefix(config.audit.api_prefix.clone()));
    }
    if config.audit.buffer_size == 0 {
        errors.push(ConfigError::InvalidAuditBuffer);
    }

    // Validate log level
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(ConfigError::InvalidLogLevel(config.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = ServerConfig::default();
        config.server.port = 0;

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidPort(0))));
    }

    #[test]
    fn test_invalid_api_prefix() {
        let mut config = ServerConfig::default();
        config.audit.api_prefix = "api/".to_string();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidApiPrefix(_))));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = ServerConfig::default();
        config.logging.level = "verbose".to_string();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_zero_audit_buffer() {
        let mut config = ServerConfig::default();
        config.audit.buffer_size = 0;

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidAuditBuffer)));
    }
}
