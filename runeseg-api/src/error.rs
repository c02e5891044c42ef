//! API error types

use runeseg_core::ConversionError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ill-formed input under the strict policy
    #[error("ill-formed input: {0}")]
    Conversion(#[from] ConversionError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Offset of the first ill-formed code unit, if this is a conversion error
    pub fn position(&self) -> Option<usize> {
        match self {
            ApiError::Conversion(err) => Some(err.position()),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
