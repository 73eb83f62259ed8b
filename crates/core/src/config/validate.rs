use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - API key is not blank
/// - Base URL is an http(s) URL
/// - Request timeout is positive
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let indexer = &config.indexer;

    if indexer.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "indexer.api_key must not be empty".to_string(),
        ));
    }

    let base_url = indexer.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "indexer.base_url must be an http(s) URL, got '{}'",
            indexer.base_url
        )));
    }

    if indexer.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "indexer.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
