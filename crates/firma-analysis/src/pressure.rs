//! Ink-intensity pressure proxy
//!
//! Darker ink is read as heavier pressure: the proxy for an ink pixel is
//! `255 − intensity` (`intensity` itself for light ink on dark paper).

use crate::params::PressurePoints;
use crate::stats;
use firma_core::{BinaryMask, InkPolarity, RasterImage};

/// Pressure proxy of one pixel intensity.
#[inline]
pub fn pressure_of(intensity: u8, polarity: InkPolarity) -> u8 {
    match polarity {
        InkPolarity::DarkInk => 255 - intensity,
        InkPolarity::LightInk => intensity,
    }
}

/// Summarize the pressure proxy over all ink pixels.
///
/// High-pressure pixels lie strictly above the midpoint of the observed
/// pressure range. A blank mask yields zeros.
pub fn analyze_pressure(
    image: &RasterImage,
    mask: &BinaryMask,
    polarity: InkPolarity,
) -> PressurePoints {
    let data = image.data();
    let values: Vec<f64> = mask
        .data()
        .iter()
        .zip(data)
        .filter(|&(&ink, _)| ink)
        .map(|(_, &v)| pressure_of(v, polarity) as f64)
        .collect();

    let Some(mean) = stats::mean(&values) else {
        return PressurePoints::default();
    };
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mid = (lo + hi) / 2.0;
    let high_pressure_count = values.iter().filter(|&&v| v > mid).count();

    PressurePoints {
        sample_count: values.len(),
        high_pressure_count,
        low_pressure_count: values.len() - high_pressure_count,
        mean_pressure: stats::unit(mean / 255.0),
        pressure_variation: stats::unit(stats::std_dev(&values).unwrap_or(0.0) / 127.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tone_ink() {
        // Ink at 0 (left half) and 100 (right half) on white paper
        let img = RasterImage::from_fn(4, 2, |x, y| match (x, y) {
            (_, 1) => 255,
            (0 | 1, _) => 0,
            _ => 100,
        })
        .unwrap();
        let mask = BinaryMask::from_fn(4, 2, |_, y| y == 0).unwrap();
        let p = analyze_pressure(&img, &mask, InkPolarity::DarkInk);
        assert_eq!(p.sample_count, 4);
        assert_eq!(p.high_pressure_count, 2);
        assert_eq!(p.low_pressure_count, 2);
        assert!((p.mean_pressure - 205.0 / 255.0).abs() < 1e-12);
        assert!((p.pressure_variation - 50.0 / 127.5).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_ink_is_all_low() {
        let img = RasterImage::new_with_value(3, 3, 40).unwrap();
        let mask = BinaryMask::from_fn(3, 3, |_, _| true).unwrap();
        let p = analyze_pressure(&img, &mask, InkPolarity::DarkInk);
        assert_eq!(p.high_pressure_count, 0);
        assert_eq!(p.low_pressure_count, 9);
        assert_eq!(p.pressure_variation, 0.0);
    }

    #[test]
    fn test_polarity_and_blank() {
        assert_eq!(pressure_of(30, InkPolarity::DarkInk), 225);
        assert_eq!(pressure_of(225, InkPolarity::LightInk), 225);
        let img = RasterImage::new(3, 3).unwrap();
        let mask = BinaryMask::new(3, 3).unwrap();
        assert_eq!(
            analyze_pressure(&img, &mask, InkPolarity::DarkInk),
            PressurePoints::default()
        );
    }
}
