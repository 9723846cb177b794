//! Extremities, loops, ascenders and descenders

use crate::params::FeaturePoints;
use crate::stats;
use firma_core::{AnalysisConfig, BinaryMask, Calibration, PixelPoint};
use firma_region::Contour;

/// Vertical extent of a component relative to its mean row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremity {
    Ascender,
    Descender,
    Neither,
}

/// Classify a component as ascender, descender or neither.
///
/// An ascender reaches further above its mean row than `ratio` times its
/// reach below it; a descender is the mirror case.
pub fn classify_extremity(contour: &Contour, ratio: f64) -> Extremity {
    let mean_y = contour.mean_y();
    let min_y = contour.bounds.y as f64;
    let max_y = (contour.bounds.bottom() - 1) as f64;
    let above = mean_y - min_y;
    let below = max_y - mean_y;
    if above > ratio * below {
        Extremity::Ascender
    } else if below > ratio * above {
        Extremity::Descender
    } else {
        Extremity::Neither
    }
}

/// Background pixels enclosed by a component.
///
/// Flood-fills the background from the border of the component's bounding
/// box (4-connected, so diagonal ink steps still close a loop); every
/// background pixel left unreached is a hole.
pub fn hole_area(contour: &Contour) -> usize {
    let b = contour.bounds;
    let (w, h) = (b.w as usize + 2, b.h as usize + 2);
    let mut ink = vec![false; w * h];
    for p in &contour.points {
        ink[(p.y - b.y + 1) as usize * w + (p.x - b.x + 1) as usize] = true;
    }

    // The padded frame is always background, so (0, 0) seeds the outside
    let mut outside = vec![false; w * h];
    outside[0] = true;
    let mut stack = vec![0usize];
    while let Some(i) = stack.pop() {
        let (x, y) = (i % w, i / w);
        let neighbors = [
            (x > 0).then(|| i - 1),
            (x + 1 < w).then(|| i + 1),
            (y > 0).then(|| i - w),
            (y + 1 < h).then(|| i + w),
        ];
        for j in neighbors.into_iter().flatten() {
            if !ink[j] && !outside[j] {
                outside[j] = true;
                stack.push(j);
            }
        }
    }

    ink.iter()
        .zip(&outside)
        .filter(|&(&is_ink, &is_outside)| !is_ink && !is_outside)
        .count()
}

/// Area of the convex hull of the pixel centers (monotone chain).
///
/// Returns 0 for fewer than three distinct or collinear points.
pub fn convex_hull_area(points: &[PixelPoint]) -> f64 {
    let mut pts: Vec<(i64, i64)> = points.iter().map(|p| (p.x as i64, p.y as i64)).collect();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 3 {
        return 0.0;
    }

    let cross = |o: (i64, i64), a: (i64, i64), b: (i64, i64)| {
        (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };
    let mut hull: Vec<(i64, i64)> = Vec::with_capacity(pts.len() + 1);
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();

    let twice: i64 = (0..hull.len())
        .map(|i| {
            let (a, b) = (hull[i], hull[(i + 1) % hull.len()]);
            a.0 * b.1 - b.0 * a.1
        })
        .sum();
    twice.abs() as f64 / 2.0
}

/// Pixels enclosed by a closed loop, or `None` if the component is not one.
///
/// A loop surrounds at least one hole, encloses at least `min_area` pixels
/// (ink plus holes) and fills more than `solidity` of its convex hull.
pub fn loop_area(contour: &Contour, min_area: usize, solidity: f64) -> Option<usize> {
    let holes = hole_area(contour);
    if holes == 0 {
        return None;
    }
    let enclosed = contour.area() + holes;
    let hull = convex_hull_area(&contour.points);
    (enclosed >= min_area && hull > 0.0 && enclosed as f64 / hull > solidity).then_some(enclosed)
}

/// Detect start/end points, loops and vertical extremities.
pub fn analyze_feature_points(
    mask: &BinaryMask,
    contours: &[Contour],
    calibration: &Calibration,
    config: &AnalysisConfig,
) -> FeaturePoints {
    let loop_count = contours
        .iter()
        .filter(|c| c.compactness() > config.loop_compactness)
        .count();

    let loop_areas: Vec<f64> = contours
        .iter()
        .filter_map(|c| loop_area(c, config.min_loop_area, config.loop_solidity))
        .map(|a| calibration.px2_to_mm2(a as f64))
        .collect();

    let mut ascenders = 0;
    let mut descenders = 0;
    for c in contours {
        match classify_extremity(c, config.extremity_ratio) {
            Extremity::Ascender => ascenders += 1,
            Extremity::Descender => descenders += 1,
            Extremity::Neither => {}
        }
    }

    FeaturePoints {
        start_point: mask
            .first_foreground()
            .map(|p| calibration.point_to_mm(p)),
        end_point: mask.last_foreground().map(|p| calibration.point_to_mm(p)),
        loop_count,
        average_loop_area_mm2: stats::mean(&loop_areas).unwrap_or(0.0),
        ascenders,
        descenders,
    }
}
