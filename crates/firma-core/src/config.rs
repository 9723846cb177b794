//! Analysis pipeline configuration
//!
//! Every cap and classification threshold used by the analyzers lives
//! here, so tests and callers can exercise boundary behavior
//! deterministically. Missing fields fall back to the defaults when the
//! configuration is deserialized.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which intensity class is ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InkPolarity {
    /// Ink darker than paper (foreground iff intensity < threshold)
    #[default]
    DarkInk,
    /// Pale ink on dark paper (foreground iff intensity >= threshold)
    LightInk,
}

/// Knobs for a single-image analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Images with either side above this are downscaled before analysis.
    pub max_dimension: u32,
    /// Upper bound on skeleton points sampled for stroke width.
    pub max_skeleton_samples: usize,
    /// Fraction of width samples dropped from each end as outliers.
    pub outlier_trim_fraction: f64,
    /// Components with fewer points are treated as noise.
    pub min_contour_points: usize,
    pub polarity: InkPolarity,
    /// |curvature| above this is a sharp corner.
    pub sharp_corner_threshold: f64,
    /// |curvature| above this (and up to the sharp threshold) is a smooth curve.
    pub smooth_curve_threshold: f64,
    /// Isoperimetric compactness above which a component counts as a loop.
    pub loop_compactness: f64,
    /// Extent ratio above/below the mean row that marks an ascender/descender.
    pub extremity_ratio: f64,
    /// Minimum component area (pixels) used for slant estimation.
    pub min_slant_component_area: usize,
    /// Upper bound on component centroids used for the pairwise spacing.
    pub max_spacing_centroids: usize,
    /// Minimum enclosed area (pixels) of a closed loop measured for loop size.
    pub min_loop_area: usize,
    /// Enclosed-area to convex-hull-area ratio above which a closed loop is measured.
    pub loop_solidity: f64,
    /// Fail with `DegenerateImage` instead of returning a zeroed record.
    pub reject_blank: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_dimension: 2000,
            max_skeleton_samples: 5000,
            outlier_trim_fraction: 0.05,
            min_contour_points: 10,
            polarity: InkPolarity::DarkInk,
            sharp_corner_threshold: 0.5,
            smooth_curve_threshold: 0.1,
            loop_compactness: 0.3,
            extremity_ratio: 1.5,
            min_slant_component_area: 50,
            max_spacing_centroids: 2000,
            min_loop_area: 50,
            loop_solidity: 0.6,
            reject_blank: false,
        }
    }
}

impl AnalysisConfig {
    /// Set the maximum working dimension.
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Set the ink polarity.
    pub fn with_polarity(mut self, polarity: InkPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Check that every cap is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(Error::InvalidParameter(
                "max_dimension must be positive".to_string(),
            ));
        }
        if self.max_skeleton_samples == 0 {
            return Err(Error::InvalidParameter(
                "max_skeleton_samples must be positive".to_string(),
            ));
        }
        if self.max_spacing_centroids == 0 {
            return Err(Error::InvalidParameter(
                "max_spacing_centroids must be positive".to_string(),
            ));
        }
        if !(0.0..0.5).contains(&self.outlier_trim_fraction) {
            return Err(Error::InvalidParameter(format!(
                "outlier_trim_fraction {} not in [0, 0.5)",
                self.outlier_trim_fraction
            )));
        }
        let thresholds = [
            ("sharp_corner_threshold", self.sharp_corner_threshold),
            ("smooth_curve_threshold", self.smooth_curve_threshold),
            ("loop_compactness", self.loop_compactness),
            ("extremity_ratio", self.extremity_ratio),
            ("loop_solidity", self.loop_solidity),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
