//! Approximate medial axis
//!
//! A foreground pixel is on the skeleton when its distance value is at
//! least as large as every 8-neighbor's and exceeds one pixel. This is not
//! a connectivity-preserving thinning: the skeleton only supplies stroke
//! radius samples, and ridges of even-width strokes are two pixels wide.

use crate::error::{RegionError, RegionResult};
use firma_core::{BinaryMask, DistanceMap, PixelPoint};

/// Minimum distance for a ridge pixel; suppresses one-pixel border noise.
pub const MIN_RIDGE_DISTANCE: f32 = 1.0;

/// Medial-axis pixels of a foreground mask.
#[derive(Debug, Clone)]
pub struct Skeleton {
    points: Vec<PixelPoint>,
}

impl Skeleton {
    /// Skeleton points in raster order.
    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Extract the skeleton from a mask and its distance map.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the grids differ in size.
pub fn extract_skeleton(mask: &BinaryMask, dist: &DistanceMap) -> RegionResult<Skeleton> {
    if mask.dimensions() != dist.dimensions() {
        return Err(RegionError::DimensionMismatch {
            expected: mask.dimensions(),
            actual: dist.dimensions(),
        });
    }

    let (w, h) = mask.dimensions();
    let mut points = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if !mask.get(x, y) {
                continue;
            }
            let d = dist.get(x, y);
            if d <= MIN_RIDGE_DISTANCE {
                continue;
            }
            if is_local_max(dist, x, y, d) {
                points.push(PixelPoint::new(x, y));
            }
        }
    }

    Ok(Skeleton { points })
}

fn is_local_max(dist: &DistanceMap, x: u32, y: u32, d: f32) -> bool {
    let (xi, yi) = (x as i64, y as i64);
    for dy in -1..=1 {
        for dx in -1..=1 {
            if (dx, dy) != (0, 0) && dist.get_signed(xi + dx, yi + dy) > d {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::distance_transform;

    #[test]
    fn test_even_width_bar_has_two_row_ridge() {
        // 30x10 bar inside a 40x20 image
        let mask = BinaryMask::from_fn(40, 20, |x, y| (5..35).contains(&x) && (5..15).contains(&y))
            .unwrap();
        let dist = distance_transform(&mask).unwrap();
        let skel = extract_skeleton(&mask, &dist).unwrap();
        assert!(!skel.is_empty());
        for p in skel.points() {
            assert!(p.y == 9 || p.y == 10, "unexpected ridge row {}", p.y);
            assert_eq!(dist.get(p.x, p.y), 5.0);
        }
    }

    #[test]
    fn test_thin_strokes_have_no_skeleton() {
        let mask = BinaryMask::from_fn(20, 5, |_, y| y == 2).unwrap();
        let dist = distance_transform(&mask).unwrap();
        let skel = extract_skeleton(&mask, &dist).unwrap();
        assert!(skel.is_empty());
    }

    #[test]
    fn test_dimension_mismatch() {
        let mask = BinaryMask::new(4, 4).unwrap();
        let dist = DistanceMap::new_with_value(5, 4, 0.0).unwrap();
        assert!(matches!(
            extract_skeleton(&mask, &dist),
            Err(RegionError::DimensionMismatch { .. })
        ));
    }
}
