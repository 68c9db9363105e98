use super::models::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Notice TTL must be positive: ttl_secs = {0}")]
    InvalidNoticeTtl(u64),

    #[error("Fjall path must not be empty")]
    EmptyFjallPath,

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_server(config)?;
    validate_notices(config)?;
    validate_telemetry(config)?;
    Ok(())
}

fn validate_server(config: &Config) -> Result<(), ValidationError> {
    if config.server.fjall_path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyFjallPath);
    }

    Ok(())
}

/// A zero TTL would expire every notice before it is shown
fn validate_notices(config: &Config) -> Result<(), ValidationError> {
    if config.notices.ttl_secs == 0 {
        return Err(ValidationError::InvalidNoticeTtl(0));
    }

    Ok(())
}

fn validate_telemetry(config: &Config) -> Result<(), ValidationError> {
    if config.telemetry.log_filter.trim().is_empty() {
        return Err(ValidationError::EmptyLogFilter);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_valid_config() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_notice_ttl() {
        let mut config = Config::default();
        config.notices.ttl_secs = 0;

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::InvalidNoticeTtl(0))));
    }

    #[test]
    fn test_empty_fjall_path() {
        let mut config = Config::default();
        config.server.fjall_path = PathBuf::new();

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::EmptyFjallPath)));
    }

    #[test]
    fn test_blank_log_filter() {
        let mut config = Config::default();
        config.telemetry.log_filter = "  ".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::EmptyLogFilter)));
    }
}
