//! Error types for ctorscan binary analysis.
//!
//! This module provides structured error handling using thiserror. Every
//! error is scoped to a single input file, so one malformed binary cannot
//! poison the rest of a batch run.

use crate::io::error::IoError;
use thiserror::Error;

/// Main error type for ctorscan operations.
#[derive(Debug, Error)]
pub enum CtorScanError {
    /// Binary container parsing errors
    #[error("Invalid binary format: {0}")]
    InvalidFormat(String),

    /// DWARF line-number program decoding errors
    #[error("Debug info error: {0}")]
    DebugInfo(#[from] gimli::Error),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

/// Result type alias for ctorscan operations
pub type Result<T> = std::result::Result<T, CtorScanError>;

impl From<object::read::Error> for CtorScanError {
    fn from(err: object::read::Error) -> Self {
        CtorScanError::InvalidFormat(err.to_string())
    }
}

impl From<std::io::Error> for CtorScanError {
    fn from(err: std::io::Error) -> Self {
        CtorScanError::Io(IoError::StdIo(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CtorScanError::InvalidFormat("Unknown magic bytes".to_string());
        assert_eq!(err.to_string(), "Invalid binary format: Unknown magic bytes");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CtorScanError::from(io);
        assert!(matches!(err, CtorScanError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }
}
