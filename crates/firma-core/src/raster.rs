//! RasterImage - 8-bit grayscale input image
//!
//! `RasterImage` is the engine's only input image type: one byte per pixel,
//! row-major, 0 = black and 255 = white.
//!
//! # Ownership model
//!
//! `RasterImage` uses `Arc` for cheap cloning (shared ownership) and is
//! never modified once built. To paint pixels, convert to
//! [`RasterImageMut`] via [`RasterImage::try_into_mut`] or
//! [`RasterImage::to_mut`], then convert back with `Into<RasterImage>`.
//!
//! # Examples
//!
//! ```
//! use firma_core::RasterImage;
//!
//! let img = RasterImage::new_with_value(40, 10, 255).unwrap();
//! let mut img_mut = img.try_into_mut().unwrap();
//! img_mut.fill_rect(5, 2, 30, 4, 0);
//! let img: RasterImage = img_mut.into();
//! assert_eq!(img.get_pixel(6, 3), Some(0));
//! assert_eq!(img.get_pixel(0, 0), Some(255));
//! ```

use crate::error::{Error, Result};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RasterData {
    width: u32,
    height: u32,
    /// Row-major intensities, no padding
    data: Vec<u8>,
}

/// Immutable 8-bit grayscale image.
///
/// # Memory Layout
///
/// The pixel at (x, y) is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    inner: Arc<RasterData>,
}

impl RasterImage {
    /// Create a new image with all pixels set to zero (black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0)
    }

    /// Create a new image with every pixel set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self::from_parts(width, height, vec![value; size]))
    }

    /// Wrap a decoded row-major grayscale buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::ImageDecodeFailure`] if the buffer length does not match
    /// `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::ImageDecodeFailure(format!(
                "buffer length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self::from_parts(width, height, data))
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u8,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self::from_parts(width, height, data))
    }

    fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        RasterImage {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Raw row-major intensity buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Intensities of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Get a pixel value, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking beyond the slice index.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.data[y as usize * self.inner.width as usize + x as usize]
    }

    /// 256-bin intensity histogram.
    pub fn histogram(&self) -> [u32; 256] {
        let mut hist = [0u32; 256];
        for &v in self.inner.data.iter() {
            hist[v as usize] += 1;
        }
        hist
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterImageMut { inner: data }),
            Err(arc) => Err(RasterImage { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> RasterImageMut {
        RasterImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable grayscale image used while building an input.
///
/// Convert back to an immutable [`RasterImage`] using `Into<RasterImage>`.
#[derive(Debug)]
pub struct RasterImageMut {
    inner: RasterData,
}

impl RasterImageMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Mutable raw buffer.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if (x, y) is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::InvalidParameter(format!(
                "pixel ({}, {}) outside {}x{} image",
                x, y, self.inner.width, self.inner.height
            )));
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Set a pixel value; panics on out-of-range coordinates.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let idx = y as usize * self.inner.width as usize + x as usize;
        self.inner.data[idx] = value;
    }

    /// Fill the rectangle `[x, x+w) × [y, y+h)`, clipped to the image.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, value: u8) {
        let x1 = x.saturating_add(w).min(self.inner.width);
        let y1 = y.saturating_add(h).min(self.inner.height);
        for yy in y.min(y1)..y1 {
            for xx in x.min(x1)..x1 {
                self.set_pixel_unchecked(xx, yy, value);
            }
        }
    }
}

impl From<RasterImageMut> for RasterImage {
    fn from(img: RasterImageMut) -> Self {
        RasterImage {
            inner: Arc::new(img.inner),
        }
    }
}
