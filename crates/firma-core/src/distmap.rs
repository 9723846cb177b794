//! DistanceMap - floating-point distance grid
//!
//! `DistanceMap` stores one `f32` per pixel: the (approximate) distance in
//! pixels from a foreground pixel to the nearest background pixel, and 0
//! for background pixels.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with no padding. The pixel at (x, y)
//! is at index `y * width + x`.

use crate::error::{Error, Result};

/// Floating-point distance grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMap {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl DistanceMap {
    /// Create a map with all values set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(DistanceMap {
            width,
            height,
            data: vec![value; (width as usize) * (height as usize)],
        })
    }

    /// Get the map width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the map height in pixels
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
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Distance at (x, y); out-of-bounds positions read as 0 (background).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        if x < self.width && y < self.height {
            self.data[y as usize * self.width as usize + x as usize]
        } else {
            0.0
        }
    }

    /// Distance at signed coordinates; outside the grid reads as 0.
    #[inline]
    pub fn get_signed(&self, x: i64, y: i64) -> f32 {
        if x < 0 || y < 0 {
            0.0
        } else {
            self.get(x as u32, y as u32)
        }
    }

    /// Set the value at (x, y); panics on out-of-range coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = value;
    }

    /// Largest value in the map.
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(0.0f32, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_reads_zero() {
        let mut map = DistanceMap::new_with_value(3, 2, 0.0).unwrap();
        map.set(2, 1, 4.5);
        assert_eq!(map.get(2, 1), 4.5);
        assert_eq!(map.get(3, 1), 0.0);
        assert_eq!(map.get_signed(-1, 0), 0.0);
        assert_eq!(map.max(), 4.5);
    }
}
