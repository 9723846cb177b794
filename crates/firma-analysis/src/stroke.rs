//! Stroke thickness from the distance transform
//!
//! Every skeleton pixel sits on the medial axis of a stroke, so twice its
//! distance to the background is a local thickness sample.

use crate::params::StrokeWidth;
use crate::stats;
use firma_core::{AnalysisConfig, BinaryMask, Calibration, DistanceMap};
use firma_region::{Contour, Skeleton};

/// Variance reported when the width comes from the area/length estimate.
pub const FALLBACK_VARIANCE: f64 = 0.1;

/// Thickness samples in pixels: `2 × distance` at skeleton points taken in
/// raster order, evenly strided down to at most `max_samples`.
pub fn thickness_samples(skeleton: &Skeleton, dist: &DistanceMap, max_samples: usize) -> Vec<f64> {
    let points = skeleton.points();
    let stride = points.len().div_ceil(max_samples.max(1)).max(1);
    points
        .iter()
        .step_by(stride)
        .map(|p| 2.0 * dist.get(p.x, p.y) as f64)
        .collect()
}

/// Sort and drop `floor(n × fraction)` samples from each end.
///
/// Samples are kept untouched when trimming would leave nothing.
pub fn trim_outliers(mut samples: Vec<f64>, fraction: f64) -> Vec<f64> {
    samples.sort_by(|a, b| a.total_cmp(b));
    let n = samples.len();
    let k = (n as f64 * fraction).floor() as usize;
    if n > 2 * k && k > 0 {
        samples.truncate(n - k);
        samples.drain(..k);
    }
    samples
}

/// Measure stroke thickness.
///
/// Falls back to `ink area / estimated stroke length` when there is ink but
/// no skeleton (strokes at most two pixels thick). The estimated length is
/// the sum of the longer bounding-box sides of the components, or of the
/// whole ink when no component was retained.
pub fn analyze_stroke_width(
    mask: &BinaryMask,
    dist: &DistanceMap,
    skeleton: &Skeleton,
    contours: &[Contour],
    calibration: &Calibration,
    config: &AnalysisConfig,
) -> StrokeWidth {
    let ink = mask.count();
    let total = mask.data().len();
    let coverage_ratio = stats::unit(ink as f64 / total.max(1) as f64);

    if ink == 0 {
        return StrokeWidth {
            coverage_ratio,
            ..Default::default()
        };
    }

    let samples = thickness_samples(skeleton, dist, config.max_skeleton_samples);
    let samples = trim_outliers(samples, config.outlier_trim_fraction);

    if samples.is_empty() {
        let mut length: u64 = contours.iter().map(|c| c.bounds.longer_side() as u64).sum();
        if length == 0 {
            length = mask
                .bounding_box()
                .map_or(1, |b| b.longer_side() as u64)
                .max(1);
        }
        let width_mm = calibration.px_to_mm(ink as f64 / length as f64);
        tracing::debug!(width_mm, "no skeleton, using area/length estimate");
        return StrokeWidth {
            min_mm: width_mm,
            max_mm: width_mm,
            mean_mm: width_mm,
            variance: FALLBACK_VARIANCE,
            coverage_ratio,
            sample_count: 0,
        };
    }

    let mm: Vec<f64> = samples.iter().map(|&s| calibration.px_to_mm(s)).collect();
    // Sorted, so the extremes are at the ends
    let min_mm = mm[0];
    let max_mm = mm[mm.len() - 1];

    StrokeWidth {
        min_mm,
        max_mm,
        mean_mm: stats::mean(&mm).unwrap_or(0.0),
        variance: stats::variance(&mm).unwrap_or(0.0),
        coverage_ratio,
        sample_count: mm.len(),
    }
}
