//! Calibration and working-resolution selection

use crate::error::AnalysisResult;
use firma_core::{AnalysisConfig, Calibration, CalibrationInfo, RasterImage};
use firma_transform::fit_to_max_dimension;

/// Image at the resolution the analyzers run on, with its calibration.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    /// Working image (downscaled when the input exceeded `max_dimension`)
    pub image: RasterImage,
    /// Calibration for `image`
    pub calibration: Calibration,
    /// Input width before downscaling
    pub input_width: u32,
    /// Input height before downscaling
    pub input_height: u32,
}

/// Resolve the calibration and downscale oversized inputs.
///
/// The calibration factor is computed at the input resolution and then
/// resampled by the effective per-axis ratios of the working image, so
/// every millimeter measurement is independent of the scan resolution.
///
/// # Errors
///
/// Returns `InvalidCalibration` for a non-positive or non-finite declared
/// size.
pub fn prepare(
    image: &RasterImage,
    info: &CalibrationInfo,
    config: &AnalysisConfig,
) -> AnalysisResult<PreparedImage> {
    let (input_width, input_height) = image.dimensions();
    let base = Calibration::from_dimensions(input_width, input_height, info)?;
    let (working, ratio) = fit_to_max_dimension(image, config.max_dimension)?;
    let rx = working.width() as f64 / input_width as f64;
    let ry = working.height() as f64 / input_height as f64;
    let calibration = base.rescaled(rx, ry);

    tracing::debug!(
        pixels_per_mm = calibration.pixels_per_mm,
        ratio,
        "calibrated {}x{} image to {} x {} mm",
        input_width,
        input_height,
        info.width_mm,
        info.height_mm
    );

    Ok(PreparedImage {
        image: working,
        calibration,
        input_width,
        input_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_downscale_rescales_factor() {
        let img = RasterImage::new_with_value(800, 200, 255).unwrap();
        let info = CalibrationInfo {
            width_mm: 80.0,
            height_mm: 20.0,
        };
        let cfg = AnalysisConfig::default().with_max_dimension(400);
        let p = prepare(&img, &info, &cfg).unwrap();
        assert_eq!(p.image.dimensions(), (400, 100));
        assert_eq!(p.calibration.pixels_per_mm, 5.0);
        assert_eq!(p.calibration.scale, 0.5);
        assert_eq!((p.input_width, p.input_height), (800, 200));
    }

    #[test]
    fn test_rounded_axis_feeds_calibration() {
        // 4001x7 at 10 px/mm fits to 2000x3: the height ratio is 3/7, not 2000/4001
        let img = RasterImage::new_with_value(4001, 7, 255).unwrap();
        let info = CalibrationInfo::new(400.1, 0.7).unwrap();
        let p = prepare(&img, &info, &AnalysisConfig::default()).unwrap();
        assert_eq!(p.image.dimensions(), (2000, 3));
        let expected = (2000.0 / 400.1 + 3.0 / 0.7) / 2.0;
        assert!((p.calibration.pixels_per_mm - expected).abs() < 1e-9);
        let nominal_ppmm: f64 = 10.0 * 2000.0 / 4001.0;
        let height_mm = p.calibration.px_to_mm(3.0);
        assert!((height_mm - 0.7).abs() < (3.0 / nominal_ppmm - 0.7).abs());
    }

    #[test]
    fn test_invalid_calibration() {
        let img = RasterImage::new(10, 10).unwrap();
        let info = CalibrationInfo {
            width_mm: 0.0,
            height_mm: 10.0,
        };
        let err = prepare(&img, &info, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Core(firma_core::Error::InvalidCalibration { .. })
        ));
    }
}
