//! Core error types (deterministic only)

use thiserror::Error;

/// Strict-mode failure: the first ill-formed subsequence of the input
///
/// The position is counted in input code units (bytes for UTF-8, 16-bit
/// units for UTF-16, 32-bit units for UTF-32). Anything produced before the
/// failure has already been handed to the caller's sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("ill-formed code unit sequence at offset {position}")]
pub struct ConversionError {
    position: usize,
}

impl ConversionError {
    /// Failure at `position` input code units from the start
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    /// Offset of the first ill-formed subsequence, in input code units
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Result type for strict conversions
pub type Result<T> = core::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConversionError::new(7);
        assert_eq!(err.position(), 7);
        assert_eq!(
            err.to_string(),
            "ill-formed code unit sequence at offset 7"
        );
    }
}
