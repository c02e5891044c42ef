//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Input is not well-formed in the expected encoding
    IllFormed {
        /// Input name as given on the command line
        input: String,
        /// Offset of the first ill-formed code unit
        position: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::IllFormed { input, position } => {
                write!(f, "{input}: ill-formed input at code unit {position}")
            }
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
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_ill_formed_error_display() {
        let error = CliError::IllFormed {
            input: "data.bin".to_string(),
            position: 12,
        };
        assert_eq!(error.to_string(), "data.bin: ill-formed input at code unit 12");
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.to_string().contains("Configuration error: bad"));
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
