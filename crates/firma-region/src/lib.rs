//! firma-region - Foreground segmentation for signature images
//!
//! This crate turns a grayscale [`RasterImage`](firma_core::RasterImage)
//! into the geometric structures the analyzers measure:
//!
//! - **Binarization** - Otsu global threshold with configurable ink polarity
//! - **Distance transform** - two-pass (1, √2) chamfer distance to background
//! - **Skeleton** - local maxima of the distance map
//! - **Morphology** - 3x3 dilation and Zhang-Suen thinning
//! - **Contours** - 8-connected components behind the [`ContourExtractor`] trait
//!
//! # Examples
//!
//! ```
//! use firma_core::{InkPolarity, RasterImage};
//! use firma_region::{binarize, distance_transform, extract_contours, extract_skeleton};
//!
//! // White page with a 40x6 dark bar
//! let mut pm = RasterImage::new_with_value(60, 20, 255).unwrap().to_mut();
//! pm.fill_rect(10, 7, 40, 6, 0);
//! let image: RasterImage = pm.into();
//!
//! let bin = binarize(&image, InkPolarity::DarkInk).unwrap();
//! assert_eq!(bin.mask.count(), 240);
//!
//! let dist = distance_transform(&bin.mask).unwrap();
//! let skeleton = extract_skeleton(&bin.mask, &dist).unwrap();
//! assert!(!skeleton.is_empty());
//!
//! let contours = extract_contours(&bin.mask, 10).unwrap();
//! assert_eq!(contours.len(), 1);
//! ```

pub mod contour;
pub mod distance;
pub mod error;
pub mod morph;
pub mod skeleton;
pub mod threshold;

pub use contour::{
    Contour, ContourExtractor, DEFAULT_MIN_CONTOUR_POINTS, FloodFillExtractor, extract_contours,
};
pub use distance::distance_transform;
pub use error::{RegionError, RegionResult};
pub use morph::{dilate_3x3, neighbor_count, thin};
pub use skeleton::{Skeleton, extract_skeleton};
pub use threshold::{
    Binarization, binarize, compute_otsu_threshold, otsu_threshold, threshold_to_mask,
};
