//! BinaryMask - foreground/background classification grid
//!
//! A `BinaryMask` has the same dimensions as the image it was derived from;
//! `true` marks ink. Masks are cheap value types recomputed for every
//! analysis and never persisted.

use crate::error::{Error, Result};
use crate::geom::{BoundingBox, PixelPoint};

/// Boolean grid, row-major, `true` = foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BinaryMask {
    /// Create an all-background mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(BinaryMask {
            width,
            height,
            data: vec![false; (width as usize) * (height as usize)],
        })
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut mask = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    mask.set(x, y, true);
                }
            }
        }
        Ok(mask)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw row-major buffer.
    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Foreground test; out-of-bounds positions read as background.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[self.index(x, y)]
    }

    /// Foreground test with signed coordinates, for neighbor probing.
    #[inline]
    pub fn get_signed(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && self.get(x as u32, y as u32)
    }

    /// Set a pixel; panics on out-of-range coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// True if no pixel is foreground.
    pub fn is_blank(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }

    /// Foreground pixels in raster order (top-to-bottom, left-to-right).
    pub fn foreground_points(&self) -> impl Iterator<Item = PixelPoint> + '_ {
        let w = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(move |(i, _)| PixelPoint::new((i % w) as u32, (i / w) as u32))
    }

    /// First foreground pixel in raster order.
    pub fn first_foreground(&self) -> Option<PixelPoint> {
        self.foreground_points().next()
    }

    /// Last foreground pixel in raster order, found by scanning in reverse.
    pub fn last_foreground(&self) -> Option<PixelPoint> {
        let w = self.width as usize;
        self.data
            .iter()
            .rposition(|&v| v)
            .map(|i| PixelPoint::new((i % w) as u32, (i / w) as u32))
    }

    /// Tight bounding box of the foreground, `None` for a blank mask.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut points = self.foreground_points();
        let first = points.next()?;
        let mut bbox = BoundingBox::from_point(first);
        for p in points {
            bbox.include(p);
        }
        Some(bbox)
    }
}
