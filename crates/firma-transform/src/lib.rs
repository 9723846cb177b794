//! firma-transform - Resampling for signature images
//!
//! Large scans are reduced before analysis so that work stays bounded and
//! every millimeter measurement is independent of the scan resolution:
//!
//! - [`scale_to_size`] - area-mapping resample to an exact size
//! - [`fit_to_max_dimension`] - proportional downscale of oversized images
//!
//! # Examples
//!
//! ```
//! use firma_core::RasterImage;
//! use firma_transform::fit_to_max_dimension;
//!
//! let image = RasterImage::new_with_value(4000, 1000, 255).unwrap();
//! let (small, ratio) = fit_to_max_dimension(&image, 2000).unwrap();
//! assert_eq!(small.dimensions(), (2000, 500));
//! assert_eq!(ratio, 0.5);
//! ```

pub mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{fit_to_max_dimension, scale_to_size};
