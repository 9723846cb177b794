//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic image
    #[error("failed to build image: {0}")]
    ImageBuild(#[from] firma_core::Error),

    /// Failed to serialize a value dump
    #[error("failed to serialize '{name}': {message}")]
    Serialize { name: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
