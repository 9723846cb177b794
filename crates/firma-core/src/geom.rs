//! Points and rectangles
//!
//! Pixel coordinates are unsigned grid positions; millimeter points are the
//! calibrated form reported in parameter records.

use serde::{Deserialize, Serialize};

/// Integer pixel position (x to the right, y downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// True if `other` is one of the 8 neighbors of `self` (or equal).
    #[inline]
    pub fn is_adjacent(self, other: PixelPoint) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// Euclidean distance in pixels.
    pub fn distance(self, other: PixelPoint) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Calibrated position in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointMm {
    pub x: f64,
    pub y: f64,
}

impl PointMm {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel units.
///
/// `w` and `h` count pixels, so a box around a single pixel has
/// `w == h == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl BoundingBox {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Box covering exactly one pixel.
    pub const fn from_point(p: PixelPoint) -> Self {
        Self {
            x: p.x,
            y: p.y,
            w: 1,
            h: 1,
        }
    }

    /// Grow the box so it contains `p`.
    pub fn include(&mut self, p: PixelPoint) {
        let right = self.right().max(p.x + 1);
        let bottom = self.bottom().max(p.y + 1);
        self.x = self.x.min(p.x);
        self.y = self.y.min(p.y);
        self.w = right - self.x;
        self.h = bottom - self.y;
    }

    /// Right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Length of the longer side.
    #[inline]
    pub fn longer_side(&self) -> u32 {
        self.w.max(self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_grows_box() {
        let mut b = BoundingBox::from_point(PixelPoint::new(5, 5));
        b.include(PixelPoint::new(2, 8));
        b.include(PixelPoint::new(9, 6));
        assert_eq!(b, BoundingBox::new(2, 5, 8, 4));
        assert_eq!(b.area(), 32);
        assert_eq!(b.longer_side(), 8);
    }

    #[test]
    fn test_adjacency() {
        let p = PixelPoint::new(3, 3);
        assert!(p.is_adjacent(PixelPoint::new(4, 4)));
        assert!(!p.is_adjacent(PixelPoint::new(5, 3)));
        assert!((p.distance(PixelPoint::new(6, 7)) - 5.0).abs() < 1e-12);
    }
}
