//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file problem
    ConfigError(String),
    /// Invalid command-line argument combination
    InvalidArgs(String),
    /// Pipeline error from core
    PipelineError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidArgs(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::PipelineError(msg) => write!(f, "Pipeline error: {msg}"),
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
        let error = CliError::ConfigError("missing field 'source'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: missing field 'source'"
        );
    }

    #[test]
    fn test_invalid_args_display() {
        let error = CliError::InvalidArgs("--size-kb conflicts with --text".to_string());
        assert!(error.to_string().starts_with("Invalid arguments:"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::PipelineError("worker thread panicked".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{:?}", error).contains("PipelineError"));
    }
}
