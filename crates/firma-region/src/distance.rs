//! Chamfer distance transform
//!
//! Approximates, for every foreground pixel, the Euclidean distance to the
//! nearest background pixel using two raster scans with the (1, √2)
//! chamfer weights. Pixels outside the image count as background, so a
//! foreground pixel on the image border has distance 1.

use crate::error::RegionResult;
use firma_core::{BinaryMask, DistanceMap};

/// Cost of a horizontal or vertical step.
pub const CHAMFER_ORTHOGONAL: f32 = 1.0;
/// Cost of a diagonal step.
pub const CHAMFER_DIAGONAL: f32 = 1.414;

/// Compute the distance from each foreground pixel to the nearest
/// background pixel.
///
/// The forward pass (top-left to bottom-right) relaxes each foreground
/// cell against its N, W, NW and NE neighbors; the backward pass
/// (bottom-right to top-left) against S, E, SE and SW. Background cells
/// stay 0.
pub fn distance_transform(mask: &BinaryMask) -> RegionResult<DistanceMap> {
    let (w, h) = mask.dimensions();
    let sentinel = (w as f32 + h as f32) * 2.0;
    let mut dist = DistanceMap::new_with_value(w, h, 0.0)?;

    for y in 0..h {
        for x in 0..w {
            if mask.get(x, y) {
                dist.set(x, y, sentinel);
            }
        }
    }

    // Forward pass
    for y in 0..h {
        for x in 0..w {
            if !mask.get(x, y) {
                continue;
            }
            let (xi, yi) = (x as i64, y as i64);
            let best = dist
                .get(x, y)
                .min(dist.get_signed(xi, yi - 1) + CHAMFER_ORTHOGONAL)
                .min(dist.get_signed(xi - 1, yi) + CHAMFER_ORTHOGONAL)
                .min(dist.get_signed(xi - 1, yi - 1) + CHAMFER_DIAGONAL)
                .min(dist.get_signed(xi + 1, yi - 1) + CHAMFER_DIAGONAL);
            dist.set(x, y, best);
        }
    }

    // Backward pass
    for y in (0..h).rev() {
        for x in (0..w).rev() {
            if !mask.get(x, y) {
                continue;
            }
            let (xi, yi) = (x as i64, y as i64);
            let best = dist
                .get(x, y)
                .min(dist.get_signed(xi, yi + 1) + CHAMFER_ORTHOGONAL)
                .min(dist.get_signed(xi + 1, yi) + CHAMFER_ORTHOGONAL)
                .min(dist.get_signed(xi + 1, yi + 1) + CHAMFER_DIAGONAL)
                .min(dist.get_signed(xi - 1, yi + 1) + CHAMFER_DIAGONAL);
            dist.set(x, y, best);
        }
    }

    Ok(dist)
}
