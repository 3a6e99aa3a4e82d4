use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Body size limit is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.limits.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "limits.max_body_bytes cannot be 0".to_string(),
        ));
    }

    Ok(())
}
