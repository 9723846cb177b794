//! Writing dynamics: slant, rhythm and derived style classes
//!
//! Slant comes from the principal axis of each sizeable component, found
//! from its second-order central moments. Baseline, spacing and the class
//! decisions use the component centroids and areas.

use crate::params::{Readability, WritingDynamics, WritingStyle};
use crate::stats;
use firma_core::{AnalysisConfig, Calibration};
use firma_region::Contour;
use std::f64::consts::{FRAC_PI_2, PI};

/// Principal-axis slant of a component in degrees, counter-clockwise from
/// the horizontal and folded to `(−90, 90]`.
///
/// Image rows grow downward, so the moment angle is negated to report a
/// rising stroke as a positive slant.
pub fn component_slant(contour: &Contour) -> f64 {
    let (cx, cy) = contour.centroid();
    let (mut mu20, mut mu02, mut mu11) = (0.0, 0.0, 0.0);
    for p in &contour.points {
        let dx = p.x as f64 - cx;
        let dy = p.y as f64 - cy;
        mu20 += dx * dx;
        mu02 += dy * dy;
        mu11 += dx * dy;
    }
    let theta = 0.5 * (2.0 * mu11).atan2(mu20 - mu02);
    let mut slant = -theta;
    if slant <= -FRAC_PI_2 {
        slant += PI;
    }
    // Normalize -0.0
    slant.to_degrees() + 0.0
}

/// Speed estimate: wide spacing reads as fast, high curvature as slow.
///
/// `curvature` is the mean |curvature| scaled by pixels per millimeter.
pub fn estimate_velocity(spacing_mm: f64, curvature: f64) -> f64 {
    let mut v = 1.0;
    if spacing_mm > 0.0 {
        v *= 1.0 + (spacing_mm / 3.0).min(2.0);
    }
    if curvature > 0.0 {
        v *= 1.0 - (curvature / 10.0).min(0.8);
    }
    v.max(0.1)
}

/// Style class from component-size regularity, slant and curvature.
pub fn classify_style(area_cv: Option<f64>, inclination: f64, curvature: f64) -> WritingStyle {
    let Some(cv) = area_cv else {
        return WritingStyle::Unknown;
    };
    if cv < 0.5 && inclination.abs() < 15.0 && curvature < 2.0 {
        WritingStyle::Regular
    } else if curvature > 5.0 {
        WritingStyle::Cursive
    } else if inclination.abs() > 20.0 {
        WritingStyle::Slanted
    } else {
        WritingStyle::Mixed
    }
}

/// Readability class from component-size uniformity `1 − cv`.
pub fn classify_readability(area_cv: Option<f64>) -> Readability {
    let Some(cv) = area_cv else {
        return Readability::Low;
    };
    let uniformity = stats::unit(1.0 - cv);
    if uniformity > 0.7 {
        Readability::High
    } else if uniformity > 0.4 {
        Readability::Medium
    } else {
        Readability::Low
    }
}

/// Mean Euclidean distance over centroid pairs.
///
/// Above `max_centroids` an evenly strided subset is used, so the work is
/// bounded by `max_centroids²/2` pairs. `None` for fewer than two centroids.
pub fn mean_pairwise_distance(centroids: &[(f64, f64)], max_centroids: usize) -> Option<f64> {
    let stride = centroids.len().div_ceil(max_centroids.max(1)).max(1);
    let sampled: Vec<(f64, f64)> = centroids.iter().copied().step_by(stride).collect();

    let mut sum = 0.0;
    let mut pairs = 0u64;
    for (i, a) in sampled.iter().enumerate() {
        for b in &sampled[i + 1..] {
            sum += (a.0 - b.0).hypot(a.1 - b.1);
            pairs += 1;
        }
    }
    (pairs > 0).then(|| sum / pairs as f64)
}

/// Compute the writing-dynamics block.
///
/// `average_curvature` is the mean |curvature| from the curvature analyzer.
pub fn analyze_writing(
    contours: &[Contour],
    average_curvature: f64,
    calibration: &Calibration,
    config: &AnalysisConfig,
) -> WritingDynamics {
    let slants: Vec<f64> = contours
        .iter()
        .filter(|c| c.area() >= config.min_slant_component_area)
        .map(component_slant)
        .collect();
    let inclination_deg = stats::mean(&slants).unwrap_or(0.0);
    let slope_variation_deg = if slants.len() >= 2 {
        stats::std_dev(&slants).unwrap_or(0.0)
    } else {
        0.0
    };

    let centroids: Vec<(f64, f64)> = contours.iter().map(Contour::centroid).collect();
    let (baseline_deviation_mm, average_spacing_mm) = if centroids.len() >= 2 {
        let ys: Vec<f64> = centroids.iter().map(|c| c.1).collect();
        (
            calibration.px_to_mm(stats::std_dev(&ys).unwrap_or(0.0)),
            calibration.px_to_mm(
                mean_pairwise_distance(&centroids, config.max_spacing_centroids).unwrap_or(0.0),
            ),
        )
    } else {
        (0.0, 0.0)
    };

    let curvature = average_curvature * calibration.pixels_per_mm;
    let areas: Vec<f64> = contours.iter().map(|c| c.area() as f64).collect();
    let area_cv = if areas.is_empty() {
        None
    } else {
        Some(stats::coefficient_of_variation(&areas).unwrap_or(0.0))
    };

    WritingDynamics {
        inclination_deg,
        slope_variation_deg,
        baseline_deviation_mm,
        average_spacing_mm,
        velocity: estimate_velocity(average_spacing_mm, curvature),
        style: classify_style(area_cv, inclination_deg, curvature),
        readability: classify_readability(area_cv),
    }
}
