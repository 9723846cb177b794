//! Acquisition quality metrics

use crate::params::ImageQuality;
use crate::stats;
use firma_core::{BinaryMask, RasterImage};

/// Background noise, ink/paper contrast and their composite.
///
/// Noise is the background intensity standard deviation over 127.5;
/// contrast is the difference of class means over 255 (0 when either class
/// is empty); quality is `contrast × (1 − noise)`.
pub fn analyze_quality(image: &RasterImage, mask: &BinaryMask) -> ImageQuality {
    let mut background = Vec::new();
    let mut foreground = Vec::new();
    for (&ink, &v) in mask.data().iter().zip(image.data()) {
        if ink {
            foreground.push(v as f64);
        } else {
            background.push(v as f64);
        }
    }

    let background_noise = stats::unit(stats::std_dev(&background).unwrap_or(0.0) / 127.5);
    let contrast_level = match (stats::mean(&background), stats::mean(&foreground)) {
        (Some(bg), Some(fg)) => stats::unit((bg - fg).abs() / 255.0),
        _ => 0.0,
    };

    ImageQuality {
        background_noise,
        contrast_level,
        quality: stats::unit(contrast_level * (1.0 - background_noise)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_scan() {
        let img = RasterImage::from_fn(10, 10, |x, _| if x < 3 { 0 } else { 255 }).unwrap();
        let mask = BinaryMask::from_fn(10, 10, |x, _| x < 3).unwrap();
        let q = analyze_quality(&img, &mask);
        assert_eq!(q.background_noise, 0.0);
        assert_eq!(q.contrast_level, 1.0);
        assert_eq!(q.quality, 1.0);
    }

    #[test]
    fn test_noisy_background() {
        // Background alternates 200/250: std 25
        let img = RasterImage::from_fn(10, 10, |x, y| match (x < 2, (x + y) % 2) {
            (true, _) => 50,
            (false, 0) => 200,
            _ => 250,
        })
        .unwrap();
        let mask = BinaryMask::from_fn(10, 10, |x, _| x < 2).unwrap();
        let q = analyze_quality(&img, &mask);
        assert!((q.background_noise - 25.0 / 127.5).abs() < 1e-12);
        assert!((q.contrast_level - 175.0 / 255.0).abs() < 1e-12);
        let expected = (175.0 / 255.0) * (1.0 - 25.0 / 127.5);
        assert!((q.quality - expected).abs() < 1e-12);
    }

    #[test]
    fn test_blank_has_no_contrast() {
        let img = RasterImage::new_with_value(5, 5, 255).unwrap();
        let mask = BinaryMask::new(5, 5).unwrap();
        let q = analyze_quality(&img, &mask);
        assert_eq!(q.contrast_level, 0.0);
        assert_eq!(q.quality, 0.0);
    }
}
