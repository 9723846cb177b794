//! I/O error types
//!
//! Decoder failures from the `image` crate are flattened into
//! [`IoError::Decode`] so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes could not be decoded as a supported image format
    #[error("decode error: {0}")]
    Decode(String),

    /// The encoder rejected the image
    #[error("encode error: {0}")]
    Encode(String),

    /// The decoded buffer was rejected by the core library
    #[error("core error: {0}")]
    Core(#[from] firma_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
