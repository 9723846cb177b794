//! Image scaling operations
//!
//! Area mapping: each output pixel is the coverage-weighted mean of the
//! source pixels its footprint overlaps, which anti-aliases thin strokes
//! instead of dropping them the way sampling would.

use crate::error::{TransformError, TransformResult};
use firma_core::RasterImage;

/// Scale an image to a specific size by area mapping
///
/// # Arguments
///
/// * `image` - Input image
/// * `width` - Target width
/// * `height` - Target height
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if a target dimension is 0.
pub fn scale_to_size(image: &RasterImage, width: u32, height: u32) -> TransformResult<RasterImage> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size {}x{} must be non-zero",
            width, height
        )));
    }
    if (width, height) == image.dimensions() {
        return Ok(image.clone());
    }

    let src_w = image.width() as usize;
    let xs = axis_weights(image.width(), width);
    let ys = axis_weights(image.height(), height);
    let data = image.data();

    let out = RasterImage::from_fn(width, height, |ox, oy| {
        let mut acc = 0.0;
        let mut total = 0.0;
        for &(sy, wy) in &ys[oy as usize] {
            let row = sy as usize * src_w;
            for &(sx, wx) in &xs[ox as usize] {
                let w = wx * wy;
                acc += data[row + sx as usize] as f64 * w;
                total += w;
            }
        }
        if total > 0.0 {
            (acc / total).round().clamp(0.0, 255.0) as u8
        } else {
            0
        }
    })?;
    Ok(out)
}

/// Source indices and overlap weights for every output index along one axis.
fn axis_weights(src: u32, dst: u32) -> Vec<Vec<(u32, f64)>> {
    let step = src as f64 / dst as f64;
    (0..dst)
        .map(|o| {
            let start = o as f64 * step;
            let end = start + step;
            let first = start.floor() as u32;
            let last = (end.ceil() as u32).min(src);
            (first..last)
                .filter_map(|i| {
                    let overlap = end.min(i as f64 + 1.0) - start.max(i as f64);
                    (overlap > 1e-12).then_some((i, overlap))
                })
                .collect()
        })
        .collect()
}

/// Proportionally downscale an image whose larger side exceeds `max_dimension`
///
/// The ratio is `max_dimension / max(width, height)`; each output side is
/// rounded and at least 1. Images that already fit are returned unchanged
/// with ratio 1.
///
/// # Returns
///
/// The working image and the ratio applied, to be folded into the
/// calibration factor.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `max_dimension` is 0.
pub fn fit_to_max_dimension(
    image: &RasterImage,
    max_dimension: u32,
) -> TransformResult<(RasterImage, f64)> {
    if max_dimension == 0 {
        return Err(TransformError::InvalidParameters(
            "max_dimension must be positive".to_string(),
        ));
    }

    let (w, h) = image.dimensions();
    let longest = w.max(h);
    if longest <= max_dimension {
        return Ok((image.clone(), 1.0));
    }

    let ratio = max_dimension as f64 / longest as f64;
    let new_w = ((w as f64 * ratio).round() as u32).max(1);
    let new_h = ((h as f64 * ratio).round() as u32).max(1);
    tracing::warn!(
        from_width = w,
        from_height = h,
        to_width = new_w,
        to_height = new_h,
        "downscaling oversized image by {:.4}",
        ratio
    );

    let scaled = scale_to_size(image, new_w, new_h)?;
    Ok((scaled, ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halving_averages_blocks() {
        // 2x2 blocks of 0/100/200/40
        let img = RasterImage::from_fn(4, 2, |x, y| match (x, y) {
            (0, 0) | (1, 1) => 0,
            (0, 1) | (1, 0) => 100,
            (2, _) => 200,
            _ => 40,
        })
        .unwrap();
        let out = scale_to_size(&img, 2, 1).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(50));
        assert_eq!(out.get_pixel(1, 0), Some(120));
    }

    #[test]
    fn test_fractional_footprint() {
        // 3 -> 2: the middle pixel is split evenly between both outputs
        let img = RasterImage::from_fn(3, 1, |x, _| [0, 90, 180][x as usize]).unwrap();
        let out = scale_to_size(&img, 2, 1).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(30));
        assert_eq!(out.get_pixel(1, 0), Some(150));
    }

    #[test]
    fn test_same_size_is_identity() {
        let img = RasterImage::from_fn(5, 3, |x, y| (x * 10 + y) as u8).unwrap();
        assert_eq!(scale_to_size(&img, 5, 3).unwrap(), img);
    }

    #[test]
    fn test_zero_target_rejected() {
        let img = RasterImage::new(4, 4).unwrap();
        assert!(matches!(
            scale_to_size(&img, 0, 2),
            Err(TransformError::InvalidParameters(_))
        ));
        assert!(fit_to_max_dimension(&img, 0).is_err());
    }

    #[test]
    fn test_fit_keeps_small_images() {
        let img = RasterImage::new(300, 100).unwrap();
        let (out, ratio) = fit_to_max_dimension(&img, 300).unwrap();
        assert_eq!(ratio, 1.0);
        assert_eq!(out.dimensions(), (300, 100));
    }

    #[test]
    fn test_fit_extreme_aspect_keeps_one_pixel() {
        let img = RasterImage::new(1000, 1).unwrap();
        let (out, ratio) = fit_to_max_dimension(&img, 100).unwrap();
        assert_eq!(ratio, 0.1);
        assert_eq!(out.dimensions(), (100, 1));
    }
}
