//! Pixel-to-millimeter calibration
//!
//! The operator declares the real width and height of the signature; the
//! calibration factor is the mean of the horizontal and vertical
//! pixels-per-millimeter ratios and is applied uniformly to both axes. Any
//! aspect distortion of the source image is deliberately left uncorrected.

use crate::error::{Error, Result};
use crate::geom::{PixelPoint, PointMm};
use serde::{Deserialize, Serialize};

/// Real-world size of the signature as declared by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationInfo {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl CalibrationInfo {
    /// Create a validated calibration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCalibration`] if either size is not a
    /// positive finite number.
    pub fn new(width_mm: f64, height_mm: f64) -> Result<Self> {
        let info = CalibrationInfo {
            width_mm,
            height_mm,
        };
        info.validate()?;
        Ok(info)
    }

    /// Check that both sizes are positive and finite.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width_mm) && ok(self.height_mm) {
            Ok(())
        } else {
            Err(Error::InvalidCalibration {
                width_mm: self.width_mm,
                height_mm: self.height_mm,
            })
        }
    }

    /// Declared width over declared height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width_mm / self.height_mm
    }
}

/// Resolved calibration for the working resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    /// Uniform factor applied to X and Y at the working resolution
    pub pixels_per_mm: f64,
    /// Horizontal ratio at the input resolution
    pub pixels_per_mm_x: f64,
    /// Vertical ratio at the input resolution
    pub pixels_per_mm_y: f64,
    /// Downscale ratio applied to the image (1.0 when unscaled)
    pub scale: f64,
}

impl Calibration {
    /// Derive the calibration factor for an image of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if a pixel dimension is 0 and
    /// [`Error::InvalidCalibration`] if the declared sizes are invalid.
    pub fn from_dimensions(
        pixel_width: u32,
        pixel_height: u32,
        info: &CalibrationInfo,
    ) -> Result<Self> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(Error::InvalidDimension {
                width: pixel_width,
                height: pixel_height,
            });
        }
        info.validate()?;

        let pixels_per_mm_x = pixel_width as f64 / info.width_mm;
        let pixels_per_mm_y = pixel_height as f64 / info.height_mm;
        Ok(Calibration {
            pixels_per_mm: (pixels_per_mm_x + pixels_per_mm_y) / 2.0,
            pixels_per_mm_x,
            pixels_per_mm_y,
            scale: 1.0,
        })
    }

    /// Same calibration after resampling the image by `rx` horizontally
    /// and `ry` vertically, both relative to the input resolution.
    ///
    /// Rounded output sizes make the effective ratios differ per axis, so
    /// the uniform factor is the mean of the two resampled axis factors and
    /// `scale` is the mean of the two ratios.
    pub fn rescaled(&self, rx: f64, ry: f64) -> Self {
        Calibration {
            pixels_per_mm: (self.pixels_per_mm_x * rx + self.pixels_per_mm_y * ry) / 2.0,
            scale: (rx + ry) / 2.0,
            ..*self
        }
    }

    /// Convert a pixel length at the working resolution to millimeters.
    #[inline]
    pub fn px_to_mm(&self, px: f64) -> f64 {
        px / self.pixels_per_mm
    }

    /// Convert a pixel area to square millimeters.
    #[inline]
    pub fn px2_to_mm2(&self, px2: f64) -> f64 {
        px2 / (self.pixels_per_mm * self.pixels_per_mm)
    }

    /// Convert a pixel position to millimeters from the top-left corner.
    pub fn point_to_mm(&self, p: PixelPoint) -> PointMm {
        PointMm::new(self.px_to_mm(p.x as f64), self.px_to_mm(p.y as f64))
    }
}
