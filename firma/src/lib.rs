//! firma - Signature image analysis for Rust
//!
//! Measures a scanned handwritten signature in calibrated millimeters and
//! compares the resulting parameter records.
//!
//! # Overview
//!
//! - Image decoding to 8-bit grayscale
//! - Calibration from the declared real-world size, with downscaling of
//!   oversized scans
//! - Otsu binarization, chamfer distance transform, skeleton and
//!   connected-component extraction
//! - Stroke width, pressure, curvature, spatial, connectivity, feature
//!   point, writing dynamics and image quality analyzers
//! - Weighted similarity scoring and per-parameter difference reports
//!
//! # Example
//!
//! ```
//! use firma::{AnalysisConfig, CalibrationInfo, RasterImage, analysis};
//!
//! let mut pm = RasterImage::new_with_value(240, 50, 255).unwrap().to_mut();
//! pm.fill_rect(20, 20, 200, 10, 0);
//! let image: RasterImage = pm.into();
//!
//! let info = CalibrationInfo::new(24.0, 5.0).unwrap();
//! let params = analysis::extract_parameters(&image, &info, &AnalysisConfig::default()).unwrap();
//! assert_eq!(params.connectivity.connected_components, 1);
//! ```

// Re-export core types (used by every stage)
pub use firma_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use firma_analysis as analysis;
pub use firma_io as io;
pub use firma_region as region;
pub use firma_transform as transform;
