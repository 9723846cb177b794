//! Discrete curvature along contour point sequences
//!
//! For consecutive points `p1, p2, p3` with `v1 = p2 − p1` and
//! `v2 = p3 − p2`, the curvature is `cross(v1, v2) / (|v1|·|v2|)`, the sine
//! of the turning angle. Triples with a zero-length vector are skipped.

use crate::params::CurvatureMetrics;
use firma_core::{AnalysisConfig, Calibration, PixelPoint};
use firma_region::Contour;

/// Curvature of the triple `(p1, p2, p3)`, `None` for a degenerate triple.
pub fn triple_curvature(p1: PixelPoint, p2: PixelPoint, p3: PixelPoint) -> Option<f64> {
    let v1 = (p2.x as f64 - p1.x as f64, p2.y as f64 - p1.y as f64);
    let v2 = (p3.x as f64 - p2.x as f64, p3.y as f64 - p2.y as f64);
    let n1 = v1.0.hypot(v1.1);
    let n2 = v2.0.hypot(v2.1);
    if n1 == 0.0 || n2 == 0.0 {
        return None;
    }
    Some((v1.0 * v2.1 - v1.1 * v2.0) / (n1 * n2))
}

/// Curvature signal over every interior point of a sequence.
pub fn curvature_signal(points: &[PixelPoint]) -> Vec<f64> {
    points
        .windows(3)
        .filter_map(|w| triple_curvature(w[0], w[1], w[2]))
        .collect()
}

/// Classify and aggregate the curvature of all contours.
pub fn analyze_curvature(
    contours: &[Contour],
    calibration: &Calibration,
    config: &AnalysisConfig,
) -> CurvatureMetrics {
    let mut sharp_corners = 0;
    let mut smooth_curves = 0;
    let mut sum_abs = 0.0;
    let mut evaluated = 0usize;
    let mut length_px = 0.0;

    for contour in contours {
        length_px += contour.polyline_length();
        for k in curvature_signal(&contour.points) {
            let a = k.abs();
            if a > config.sharp_corner_threshold {
                sharp_corners += 1;
            } else if a > config.smooth_curve_threshold {
                smooth_curves += 1;
            }
            sum_abs += a;
            evaluated += 1;
        }
    }

    let average_curvature = if evaluated > 0 {
        sum_abs / evaluated as f64
    } else {
        0.0
    };

    CurvatureMetrics {
        total_curve_length_mm: calibration.px_to_mm(length_px),
        sharp_corners,
        smooth_curves,
        average_curvature,
    }
}
