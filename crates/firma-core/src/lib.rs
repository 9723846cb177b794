//! firma Core - Basic data structures for signature image analysis
//!
//! This crate provides the value types shared by every stage of the
//! analysis pipeline:
//!
//! - [`RasterImage`] / [`RasterImageMut`] - 8-bit grayscale input (immutable / mutable)
//! - [`BinaryMask`] - foreground/background classification
//! - [`DistanceMap`] - per-pixel distance to background
//! - [`PixelPoint`] / [`PointMm`] / [`BoundingBox`] - geometry
//! - [`CalibrationInfo`] / [`Calibration`] - pixel-to-millimeter conversion
//! - [`AnalysisConfig`] - pipeline caps and thresholds

pub mod calibration;
pub mod config;
pub mod distmap;
pub mod error;
pub mod geom;
pub mod mask;
pub mod raster;

pub use calibration::{Calibration, CalibrationInfo};
pub use config::{AnalysisConfig, InkPolarity};
pub use distmap::DistanceMap;
pub use error::{Error, Result};
pub use geom::{BoundingBox, PixelPoint, PointMm};
pub use mask::BinaryMask;
pub use raster::{RasterImage, RasterImageMut};
