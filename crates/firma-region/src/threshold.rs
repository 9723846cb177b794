//! Global binarization
//!
//! Converts a grayscale image to a [`BinaryMask`] with Otsu's method:
//! the threshold maximizing the between-class variance of the intensity
//! histogram. Which side of the threshold is ink is a configuration choice
//! ([`InkPolarity`]), never auto-detected.

use crate::error::RegionResult;
use firma_core::{BinaryMask, InkPolarity, RasterImage};

/// Result of binarizing an image.
#[derive(Debug, Clone)]
pub struct Binarization {
    /// Foreground mask
    pub mask: BinaryMask,
    /// Selected threshold, `None` when the histogram had no split
    pub threshold: Option<u8>,
}

/// Compute Otsu's threshold from a 256-bin histogram.
///
/// Candidate `t` splits the levels into `[0, t)` and `[t, 255]`; the
/// returned `t` maximizes `wB·wF·(mB−mF)²`, taking the first maximum.
/// Returns `None` when fewer than two levels are populated.
pub fn otsu_threshold(histogram: &[u32; 256]) -> Option<u8> {
    let total: f64 = histogram.iter().map(|&c| c as f64).sum();
    if total == 0.0 {
        return None;
    }
    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_b = 0.0;
    let mut sum_b = 0.0;
    let mut best: Option<(u8, f64)> = None;

    for t in 1..256usize {
        weight_b += histogram[t - 1] as f64;
        sum_b += (t - 1) as f64 * histogram[t - 1] as f64;
        let weight_f = total - weight_b;
        if weight_b == 0.0 {
            continue;
        }
        if weight_f == 0.0 {
            break;
        }
        let mean_b = sum_b / weight_b;
        let mean_f = (sum_all - sum_b) / weight_f;
        let between = weight_b * weight_f * (mean_b - mean_f) * (mean_b - mean_f);
        if best.is_none_or(|(_, v)| between > v) {
            best = Some((t as u8, between));
        }
    }

    best.map(|(t, _)| t)
}

/// Compute Otsu's threshold for a grayscale image.
pub fn compute_otsu_threshold(image: &RasterImage) -> Option<u8> {
    otsu_threshold(&image.histogram())
}

/// Classify every pixel against a fixed threshold.
///
/// With [`InkPolarity::DarkInk`] a pixel is foreground iff its intensity
/// is below `threshold`; with [`InkPolarity::LightInk`] iff it is at or
/// above it.
pub fn threshold_to_mask(
    image: &RasterImage,
    threshold: u8,
    polarity: InkPolarity,
) -> RegionResult<BinaryMask> {
    let (w, h) = image.dimensions();
    let data = image.data();
    let mask = BinaryMask::from_fn(w, h, |x, y| {
        let v = data[y as usize * w as usize + x as usize];
        match polarity {
            InkPolarity::DarkInk => v < threshold,
            InkPolarity::LightInk => v >= threshold,
        }
    })?;
    Ok(mask)
}

/// Binarize an image using Otsu's method.
///
/// An image with a single intensity level has no ink: the mask is empty.
pub fn binarize(image: &RasterImage, polarity: InkPolarity) -> RegionResult<Binarization> {
    let threshold = compute_otsu_threshold(image);
    let mask = match threshold {
        Some(t) => threshold_to_mask(image, t, polarity)?,
        None => BinaryMask::new(image.width(), image.height())?,
    };
    tracing::debug!(
        threshold = ?threshold,
        foreground = mask.count(),
        "binarized {}x{} image",
        image.width(),
        image.height()
    );
    Ok(Binarization { mask, threshold })
}
