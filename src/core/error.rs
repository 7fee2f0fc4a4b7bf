//! Error types for VideoMD construction
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Error types for VideoMD operations
#[derive(Debug, Error)]
pub enum VmdError {
    /// Invalid parameter: a key outside the section whitelist, or a value
    /// that does not fit the field it was supplied for
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// IO error from the underlying writer
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for VideoMD operations
pub type VmdResult<T> = Result<T, VmdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VmdError::InvalidParam("parameter 'typo' not recognized".to_string());
        assert!(err.to_string().contains("Invalid parameter"));
        assert!(err.to_string().contains("typo"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let vmd_err: VmdError = io_err.into();
        assert!(matches!(vmd_err, VmdError::IoError(_)));
    }
}
