//! Error types for firma-core
//!
//! Provides a unified error type for the core grids and the calibration
//! step. The analyzer crates wrap it with `#[from]` so callers can match on
//! the structural failures (bad calibration, undecodable input) regardless of
//! which stage reported them.

use thiserror::Error;

/// firma core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Declared real-world size is missing, non-positive or not finite
    #[error("invalid calibration: {width_mm} x {height_mm} mm (both must be positive)")]
    InvalidCalibration { width_mm: f64, height_mm: f64 },

    /// Pixel buffer cannot be interpreted as an image
    #[error("image decode failure: {0}")]
    ImageDecodeFailure(String),

    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No foreground pixels survived binarization.
    ///
    /// Only raised when the caller asks for blank images to be rejected;
    /// by default a blank image yields a zeroed parameter record.
    #[error("degenerate image: no foreground pixels after binarization")]
    DegenerateImage,
}

/// Result type alias for firma core operations
pub type Result<T> = std::result::Result<T, Error>;
