//! Error types for firma-analysis

use thiserror::Error;

/// Errors that can occur while extracting or comparing parameters
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Core library error (calibration, dimensions, blank rejection)
    #[error("core error: {0}")]
    Core(#[from] firma_core::Error),

    /// Segmentation error
    #[error("region error: {0}")]
    Region(#[from] firma_region::RegionError),

    /// Resampling error
    #[error("transform error: {0}")]
    Transform(#[from] firma_transform::TransformError),

    /// A comparison was requested without any reference record
    #[error("no reference signature provided")]
    NoReferenceProvided,
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
