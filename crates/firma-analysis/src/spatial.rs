//! Ink placement and component structure

use crate::params::{Connectivity, SpatialDistribution};
use crate::stats;
use firma_core::{BinaryMask, Calibration, PixelPoint};
use firma_region::{Contour, dilate_3x3, neighbor_count, thin};

/// Turning angle above which consecutive steps count as a direction change.
pub const DIRECTION_CHANGE_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Center of mass, density, bounding-box fill and overlap of the ink.
///
/// A blank mask reports its center of mass at `(0.5, 0.5)`.
pub fn analyze_spatial(mask: &BinaryMask) -> SpatialDistribution {
    let (w, h) = mask.dimensions();
    let mut n = 0u64;
    let (mut sx, mut sy) = (0.0, 0.0);
    for p in mask.foreground_points() {
        sx += p.x as f64;
        sy += p.y as f64;
        n += 1;
    }

    if n == 0 {
        return SpatialDistribution {
            center_of_mass_x: 0.5,
            center_of_mass_y: 0.5,
            ink_density: 0.0,
            bbox_fill_ratio: 0.0,
            overlap_ratio: 0.0,
        };
    }

    let bbox_fill_ratio = mask
        .bounding_box()
        .map_or(0.0, |b| n as f64 / b.area() as f64);

    SpatialDistribution {
        center_of_mass_x: stats::unit(sx / n as f64 / w as f64),
        center_of_mass_y: stats::unit(sy / n as f64 / h as f64),
        ink_density: stats::unit(n as f64 / (w as f64 * h as f64)),
        bbox_fill_ratio: stats::unit(bbox_fill_ratio),
        overlap_ratio: overlap_ratio(mask),
    }
}

/// Ink pixels over the pixels of the ink dilated by a 3x3 square.
///
/// In `(0, 1]`; 0 for a blank mask.
pub fn overlap_ratio(mask: &BinaryMask) -> f64 {
    let ink = mask.count();
    if ink == 0 {
        return 0.0;
    }
    stats::unit(ink as f64 / dilate_3x3(mask).count() as f64)
}

/// Count branch points of the thinned ink.
///
/// A pixel of the thinned mask with more than two 8-neighbors is a
/// junction; 8-adjacent junction pixels form one connection.
pub fn letter_connections(mask: &BinaryMask) -> usize {
    let thinned = thin(mask);
    let (w, h) = thinned.dimensions();
    let mut junctions: Vec<bool> = vec![false; w as usize * h as usize];
    for p in thinned.foreground_points() {
        if neighbor_count(&thinned, p.x, p.y) > 2 {
            junctions[p.y as usize * w as usize + p.x as usize] = true;
        }
    }

    let mut clusters = 0;
    let mut stack = Vec::new();
    for start in 0..junctions.len() {
        if !junctions[start] {
            continue;
        }
        clusters += 1;
        junctions[start] = false;
        stack.push(start);
        while let Some(i) = stack.pop() {
            let (x, y) = ((i % w as usize) as i64, (i / w as usize) as i64);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                        continue;
                    }
                    let j = ny as usize * w as usize + nx as usize;
                    if junctions[j] {
                        junctions[j] = false;
                        stack.push(j);
                    }
                }
            }
        }
    }
    clusters
}

/// Fraction of consecutive step pairs that turn by more than 45°.
///
/// Returns 0 for sequences with fewer than three points.
pub fn stroke_complexity(points: &[PixelPoint]) -> f64 {
    let steps: Vec<(f64, f64)> = points
        .windows(2)
        .map(|w| {
            (
                w[1].x as f64 - w[0].x as f64,
                w[1].y as f64 - w[0].y as f64,
            )
        })
        .filter(|&(dx, dy)| dx != 0.0 || dy != 0.0)
        .collect();
    if steps.len() < 2 {
        return 0.0;
    }

    let changes = steps
        .windows(2)
        .filter(|s| {
            let (a, b) = (s[0], s[1]);
            let cos = (a.0 * b.0 + a.1 * b.1) / (a.0.hypot(a.1) * b.0.hypot(b.1));
            // Tolerance keeps exact diagonal turns at 45°
            cos.clamp(-1.0, 1.0).acos() > DIRECTION_CHANGE_ANGLE + 1e-9
        })
        .count();
    changes as f64 / (steps.len() - 1) as f64
}

/// Component count, gaps, total stroke length, complexity and letter
/// connections.
///
/// Stroke length is the ink area divided by the mean stroke width, the
/// length of a ribbon of that width covering the same area.
pub fn analyze_connectivity(
    mask: &BinaryMask,
    contours: &[Contour],
    mean_width_mm: f64,
    calibration: &Calibration,
) -> Connectivity {
    let ink = mask.count() as f64;
    let mean_width_px = mean_width_mm * calibration.pixels_per_mm;
    let total_stroke_length_mm = if ink > 0.0 && mean_width_px > 0.0 {
        calibration.px_to_mm(ink / mean_width_px)
    } else {
        0.0
    };

    let per_contour: Vec<f64> = contours
        .iter()
        .map(|c| stroke_complexity(&c.points))
        .collect();

    Connectivity {
        connected_components: contours.len(),
        gaps: contours.len().saturating_sub(1),
        total_stroke_length_mm,
        stroke_complexity: stats::unit(stats::mean(&per_contour).unwrap_or(0.0)),
        letter_connections: letter_connections(mask),
    }
}
