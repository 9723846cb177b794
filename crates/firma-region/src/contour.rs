//! Connected-component contours
//!
//! A [`Contour`] is the ordered point list of one 8-connected foreground
//! component. The default [`FloodFillExtractor`] records points in scanline
//! flood-fill discovery order, which is not a boundary walk: consecutive
//! points run left to right along each span, and a jump separates spans.
//! Curvature and direction statistics downstream are computed over that
//! order, so alternative extractors plug in through [`ContourExtractor`].

use crate::error::RegionResult;
use firma_core::{BinaryMask, BoundingBox, PixelPoint};

/// Default minimum point count for a retained component.
pub const DEFAULT_MIN_CONTOUR_POINTS: usize = 10;

/// One connected foreground component.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Component pixels in discovery order
    pub points: Vec<PixelPoint>,
    /// Tight bounding box
    pub bounds: BoundingBox,
    /// Number of component pixels with a 4-neighbor outside the component
    pub perimeter: usize,
}

impl Contour {
    /// Build a contour from its points, measuring the perimeter against
    /// `mask`.
    ///
    /// Returns `None` for an empty point list.
    pub fn from_points(points: Vec<PixelPoint>, mask: &BinaryMask) -> Option<Self> {
        let first = *points.first()?;
        let mut bounds = BoundingBox::from_point(first);
        let mut perimeter = 0;
        for &p in &points {
            bounds.include(p);
            if is_border_pixel(mask, p) {
                perimeter += 1;
            }
        }
        Some(Contour {
            points,
            bounds,
            perimeter,
        })
    }

    /// Pixel count.
    #[inline]
    pub fn area(&self) -> usize {
        self.points.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean pixel position `(x, y)`.
    pub fn centroid(&self) -> (f64, f64) {
        let n = self.points.len().max(1) as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
        (sx / n, sy / n)
    }

    /// Mean row of the component.
    pub fn mean_y(&self) -> f64 {
        self.centroid().1
    }

    /// Isoperimetric compactness `4π·area / perimeter²`.
    ///
    /// A filled disc approaches 1; thin strokes approach 0. Returns 0 when
    /// the perimeter is 0.
    pub fn compactness(&self) -> f64 {
        if self.perimeter == 0 {
            return 0.0;
        }
        let p = self.perimeter as f64;
        4.0 * std::f64::consts::PI * self.area() as f64 / (p * p)
    }

    /// Polyline length in pixels, counting only steps between 8-adjacent
    /// consecutive points.
    pub fn polyline_length(&self) -> f64 {
        self.points
            .windows(2)
            .filter(|w| w[0].is_adjacent(w[1]))
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}

fn is_border_pixel(mask: &BinaryMask, p: PixelPoint) -> bool {
    let (x, y) = (p.x as i64, p.y as i64);
    !mask.get_signed(x - 1, y)
        || !mask.get_signed(x + 1, y)
        || !mask.get_signed(x, y - 1)
        || !mask.get_signed(x, y + 1)
}

/// Segments a foreground mask into contours.
pub trait ContourExtractor: Send + Sync {
    /// Extract all retained components of `mask`.
    fn extract(&self, mask: &BinaryMask) -> RegionResult<Vec<Contour>>;
}

/// Scanline 8-connected flood fill.
///
/// Components are seeded in raster order. Within a component each span
/// is recorded left to right; runs in the rows above and below the span
/// (including the diagonal columns) are pushed onto a stack, above first,
/// so the row below is explored first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloodFillExtractor {
    /// Components with fewer points are dropped
    pub min_points: usize,
}

impl Default for FloodFillExtractor {
    fn default() -> Self {
        Self {
            min_points: DEFAULT_MIN_CONTOUR_POINTS,
        }
    }
}

impl FloodFillExtractor {
    pub fn new(min_points: usize) -> Self {
        Self { min_points }
    }

    fn fill(
        &self,
        mask: &BinaryMask,
        visited: &mut [bool],
        seed: PixelPoint,
    ) -> Vec<PixelPoint> {
        let (w, h) = mask.dimensions();
        let idx = |x: u32, y: u32| y as usize * w as usize + x as usize;
        let open = |visited: &[bool], x: u32, y: u32| mask.get(x, y) && !visited[idx(x, y)];

        let mut points = Vec::new();
        let mut stack = vec![seed];

        while let Some(PixelPoint { x, y }) = stack.pop() {
            if !open(visited, x, y) {
                continue;
            }

            let mut xl = x;
            while xl > 0 && open(visited, xl - 1, y) {
                xl -= 1;
            }
            let mut xr = x;
            while xr + 1 < w && open(visited, xr + 1, y) {
                xr += 1;
            }

            for xi in xl..=xr {
                visited[idx(xi, y)] = true;
                points.push(PixelPoint::new(xi, y));
            }

            let lo = xl.saturating_sub(1);
            let hi = (xr + 1).min(w - 1);
            let rows = [y.checked_sub(1), (y + 1 < h).then_some(y + 1)];
            for ny in rows.into_iter().flatten() {
                let mut in_run = false;
                for xi in lo..=hi {
                    if open(visited, xi, ny) {
                        if !in_run {
                            stack.push(PixelPoint::new(xi, ny));
                            in_run = true;
                        }
                    } else {
                        in_run = false;
                    }
                }
            }
        }

        points
    }
}

impl ContourExtractor for FloodFillExtractor {
    fn extract(&self, mask: &BinaryMask) -> RegionResult<Vec<Contour>> {
        let (w, h) = mask.dimensions();
        let mut visited = vec![false; w as usize * h as usize];
        let mut contours = Vec::new();
        let mut dropped = 0usize;

        for y in 0..h {
            for x in 0..w {
                let i = y as usize * w as usize + x as usize;
                if visited[i] || !mask.get(x, y) {
                    continue;
                }
                let points = self.fill(mask, &mut visited, PixelPoint::new(x, y));
                if points.len() < self.min_points {
                    dropped += 1;
                    continue;
                }
                if let Some(contour) = Contour::from_points(points, mask) {
                    contours.push(contour);
                }
            }
        }

        tracing::debug!(
            retained = contours.len(),
            dropped,
            "flood fill found {} components",
            contours.len() + dropped
        );
        Ok(contours)
    }
}

/// Extract contours with the default flood-fill extractor.
pub fn extract_contours(mask: &BinaryMask, min_points: usize) -> RegionResult<Vec<Contour>> {
    FloodFillExtractor::new(min_points).extract(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_mask(w: u32, h: u32, rects: &[(u32, u32, u32, u32)]) -> BinaryMask {
        BinaryMask::from_fn(w, h, |x, y| {
            rects
                .iter()
                .any(|&(rx, ry, rw, rh)| x >= rx && x < rx + rw && y >= ry && y < ry + rh)
        })
        .unwrap()
    }

    #[test]
    fn test_spans_in_discovery_order() {
        let mask = rect_mask(10, 6, &[(2, 1, 4, 3)]);
        let contours = extract_contours(&mask, 1).unwrap();
        assert_eq!(contours.len(), 1);
        let pts = &contours[0].points;
        assert_eq!(pts.len(), 12);
        assert_eq!(pts[0], PixelPoint::new(2, 1));
        assert_eq!(pts[3], PixelPoint::new(5, 1));
        assert_eq!(pts[4], PixelPoint::new(2, 2));
        assert_eq!(pts[11], PixelPoint::new(5, 3));
        assert_eq!(contours[0].bounds, BoundingBox::new(2, 1, 4, 3));
    }

    #[test]
    fn test_diagonal_pixels_are_connected() {
        let mask = BinaryMask::from_fn(6, 6, |x, y| x == y).unwrap();
        let contours = extract_contours(&mask, 1).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].area(), 6);
    }

    #[test]
    fn test_small_components_dropped() {
        let mask = rect_mask(30, 10, &[(1, 1, 2, 2), (10, 2, 10, 4)]);
        let contours = extract_contours(&mask, DEFAULT_MIN_CONTOUR_POINTS).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].area(), 40);
    }

    #[test]
    fn test_u_shape_is_one_component() {
        // Two vertical bars joined at the bottom
        let mask = rect_mask(12, 12, &[(1, 1, 2, 9), (8, 1, 2, 9), (1, 9, 9, 2)]);
        let contours = extract_contours(&mask, 1).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].area(), mask.count());
    }

    #[test]
    fn test_perimeter_and_compactness() {
        let mask = rect_mask(10, 10, &[(2, 2, 5, 5)]);
        let c = &extract_contours(&mask, 1).unwrap()[0];
        assert_eq!(c.perimeter, 16);
        let expected = 4.0 * std::f64::consts::PI * 25.0 / 256.0;
        assert!((c.compactness() - expected).abs() < 1e-12);
        assert_eq!(c.centroid(), (4.0, 4.0));
    }

    #[test]
    fn test_polyline_length_skips_jumps() {
        let mask = rect_mask(10, 4, &[(0, 0, 5, 2)]);
        let c = &extract_contours(&mask, 1).unwrap()[0];
        // Two spans of 4 unit steps each; the span change is a jump
        assert_eq!(c.polyline_length(), 8.0);
    }
}
