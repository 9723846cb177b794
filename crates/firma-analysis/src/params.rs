//! Signature parameter record
//!
//! [`SignatureParameters`] is the durable output of one analysis run. It
//! serializes to camelCase JSON. Lengths and widths are in millimeters,
//! ratios and normalized scores are in `[0, 1]`.

use firma_core::PointMm;
use serde::{Deserialize, Serialize};

/// Complete parameter record for one signature image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureParameters {
    pub dimensions: Dimensions,
    pub stroke_width: StrokeWidth,
    pub pressure_points: PressurePoints,
    pub curvature_metrics: CurvatureMetrics,
    pub spatial_distribution: SpatialDistribution,
    pub connectivity: Connectivity,
    pub feature_points: FeaturePoints,
    pub writing: WritingDynamics,
    pub image_quality: ImageQuality,
}

/// Image and calibration geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    /// Input width in pixels
    pub pixel_width: u32,
    /// Input height in pixels
    pub pixel_height: u32,
    /// Width after downscaling
    pub working_width: u32,
    /// Height after downscaling
    pub working_height: u32,
    pub real_width_mm: f64,
    pub real_height_mm: f64,
    /// `real_width_mm / real_height_mm`
    pub aspect_ratio: f64,
    /// Calibration factor at the working resolution
    pub pixels_per_mm: f64,
    /// Downscale ratio (1 when the input fit)
    pub downscale_ratio: f64,
    /// Width of the tight ink bounding box
    pub ink_width_mm: f64,
    /// Height of the tight ink bounding box
    pub ink_height_mm: f64,
}

/// Stroke thickness statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeWidth {
    pub min_mm: f64,
    pub max_mm: f64,
    pub mean_mm: f64,
    /// Population variance of the thickness samples, in mm²
    pub variance: f64,
    /// Ink pixels over all pixels
    pub coverage_ratio: f64,
    /// Thickness samples used after striding and trimming
    pub sample_count: usize,
}

/// Ink-intensity pressure proxy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressurePoints {
    pub sample_count: usize,
    /// Ink pixels above the midpoint of the pressure range
    pub high_pressure_count: usize,
    pub low_pressure_count: usize,
    pub mean_pressure: f64,
    pub pressure_variation: f64,
}

/// Curvature signal aggregates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvatureMetrics {
    pub total_curve_length_mm: f64,
    pub sharp_corners: usize,
    pub smooth_curves: usize,
    /// Mean |curvature| over every evaluated point triple
    pub average_curvature: f64,
}

/// Where the ink sits in the frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialDistribution {
    /// Mean ink x over image width
    pub center_of_mass_x: f64,
    /// Mean ink y over image height
    pub center_of_mass_y: f64,
    pub ink_density: f64,
    /// Ink pixels over the tight ink bounding box area
    pub bbox_fill_ratio: f64,
    /// Ink pixels over the ink grown by one pixel; near 1 for dense
    /// overlapping strokes, near 1/3 for isolated hairlines
    #[serde(default)]
    pub overlap_ratio: f64,
}

/// Component structure of the ink.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    pub connected_components: usize,
    pub gaps: usize,
    pub total_stroke_length_mm: f64,
    pub stroke_complexity: f64,
    /// Branch points of the thinned ink, one per cluster of adjacent
    /// junction pixels
    #[serde(default)]
    pub letter_connections: usize,
}

/// Extremities and shape features.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePoints {
    /// First ink pixel in raster order
    pub start_point: Option<PointMm>,
    /// Last ink pixel in raster order
    pub end_point: Option<PointMm>,
    pub loop_count: usize,
    /// Mean area enclosed by closed, convex-enough loops; 0 without loops
    #[serde(default)]
    pub average_loop_area_mm2: f64,
    pub ascenders: usize,
    pub descenders: usize,
}

/// Writing style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WritingStyle {
    Regular,
    Cursive,
    Slanted,
    Mixed,
    #[default]
    Unknown,
}

/// Readability class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Readability {
    High,
    Medium,
    #[default]
    Low,
}

/// Slant, rhythm and derived classes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingDynamics {
    /// Mean component slant in degrees, counter-clockwise from horizontal
    pub inclination_deg: f64,
    /// Standard deviation of component slants in degrees
    pub slope_variation_deg: f64,
    pub baseline_deviation_mm: f64,
    pub average_spacing_mm: f64,
    pub velocity: f64,
    pub style: WritingStyle,
    pub readability: Readability,
}

/// Acquisition quality.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageQuality {
    pub background_noise: f64,
    pub contrast_level: f64,
    pub quality: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_camel_case() {
        let params = SignatureParameters {
            dimensions: Dimensions::default(),
            stroke_width: StrokeWidth {
                mean_mm: 0.8,
                ..Default::default()
            },
            pressure_points: PressurePoints::default(),
            curvature_metrics: CurvatureMetrics::default(),
            spatial_distribution: SpatialDistribution::default(),
            connectivity: Connectivity::default(),
            feature_points: FeaturePoints::default(),
            writing: WritingDynamics::default(),
            image_quality: ImageQuality::default(),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["strokeWidth"]["meanMm"], 0.8);
        assert!(json["featurePoints"]["startPoint"].is_null());
        assert_eq!(json["writing"]["style"], "Unknown");

        let back: SignatureParameters = serde_json::from_value(json).unwrap();
        assert_eq!(back, params);
    }
}
