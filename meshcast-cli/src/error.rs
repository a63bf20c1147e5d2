//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file missing, unreadable, or invalid
    ConfigError(String),
    /// Forecast page unreachable or its expected structure absent
    FetchError(String),
    /// Fragment could not be handed to the outbound channel
    PublishError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::FetchError(msg) => write!(f, "Fetch error: {msg}"),
            CliError::PublishError(msg) => write!(f, "Publish error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("missing field 'url'".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing field 'url'");
    }

    #[test]
    fn test_fetch_error_display() {
        let error = CliError::FetchError("forecast table not found".to_string());
        assert_eq!(error.to_string(), "Fetch error: forecast table not found");
    }

    #[test]
    fn test_publish_error_display() {
        let error = CliError::PublishError("connection refused".to_string());
        assert_eq!(error.to_string(), "Publish error: connection refused");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FetchError("timeout".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("FetchError"));
        assert!(debug_str.contains("timeout"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("test error"));
    }
}
