//! firma-analysis - Signature parameter extraction and comparison
//!
//! This crate measures a scanned handwritten signature and compares
//! parameter records:
//!
//! - **Extraction** - [`extract_parameters`] runs calibration, binarization,
//!   segmentation and every analyzer, producing a [`SignatureParameters`]
//!   record in millimeters
//! - **Similarity** - [`compare_signatures`] scores a questioned record
//!   against one or more references
//! - **Report** - [`describe_differences`] lists per-parameter verdicts
//!
//! Each analyzer is also exposed on its own so callers can run a subset on
//! precomputed masks and contours.
//!
//! # Examples
//!
//! ```
//! use firma_analysis::{SimilarityWeights, compare_signatures, extract_parameters};
//! use firma_core::{AnalysisConfig, CalibrationInfo, RasterImage};
//!
//! let mut pm = RasterImage::new_with_value(240, 50, 255).unwrap().to_mut();
//! pm.fill_rect(20, 20, 200, 10, 0);
//! let image: RasterImage = pm.into();
//!
//! let info = CalibrationInfo::new(24.0, 5.0).unwrap();
//! let params = extract_parameters(&image, &info, &AnalysisConfig::default()).unwrap();
//!
//! let score = compare_signatures(&params, &[params.clone()], &SimilarityWeights::default())
//!     .unwrap();
//! assert!(score.score > 0.99);
//! ```

pub mod curvature;
pub mod error;
pub mod features;
pub mod params;
pub mod pipeline;
pub mod prepare;
pub mod pressure;
pub mod quality;
pub mod report;
pub mod similarity;
pub mod spatial;
pub mod stats;
pub mod stroke;
pub mod writing;

pub use curvature::{analyze_curvature, curvature_signal, triple_curvature};
pub use error::{AnalysisError, AnalysisResult};
pub use features::{
    Extremity, analyze_feature_points, classify_extremity, convex_hull_area, hole_area, loop_area,
};
pub use params::{
    Connectivity, CurvatureMetrics, Dimensions, FeaturePoints, ImageQuality, PressurePoints,
    Readability, SignatureParameters, SpatialDistribution, StrokeWidth, WritingDynamics,
    WritingStyle,
};
pub use pipeline::{extract_parameters, extract_parameters_with};
pub use prepare::{PreparedImage, prepare};
pub use pressure::{analyze_pressure, pressure_of};
pub use quality::analyze_quality;
pub use report::{Finding, Verdict, describe_differences};
pub use similarity::{
    ComponentScores, NEUTRAL_SCORE, ReferenceSimilarity, SimilarityScore, SimilarityWeights,
    compare_signatures, component_scores, component_similarity, weighted_similarity,
};
pub use spatial::{
    analyze_connectivity, analyze_spatial, letter_connections, overlap_ratio, stroke_complexity,
};
pub use stroke::{analyze_stroke_width, thickness_samples, trim_outliers};
pub use writing::{
    analyze_writing, classify_readability, classify_style, component_slant, estimate_velocity,
    mean_pairwise_distance,
};
