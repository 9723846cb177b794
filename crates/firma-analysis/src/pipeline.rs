//! Single-image parameter extraction
//!
//! Stages, in order: calibration and downscaling, Otsu binarization,
//! distance transform, skeleton, contour extraction, then the analyzers.
//! Every stage owns or borrows its grids; nothing is shared between calls.

use crate::curvature::analyze_curvature;
use crate::error::AnalysisResult;
use crate::features::analyze_feature_points;
use crate::params::{Dimensions, SignatureParameters};
use crate::prepare::prepare;
use crate::pressure::analyze_pressure;
use crate::quality::analyze_quality;
use crate::spatial::{analyze_connectivity, analyze_spatial};
use crate::stroke::analyze_stroke_width;
use crate::writing::analyze_writing;
use firma_core::{AnalysisConfig, CalibrationInfo, Error, RasterImage};
use firma_region::{
    ContourExtractor, FloodFillExtractor, binarize, distance_transform, extract_skeleton,
};

/// Extract the full parameter record from a grayscale signature image.
///
/// # Arguments
///
/// * `image` - Decoded grayscale image
/// * `calibration` - Declared real-world size of the signature
/// * `config` - Pipeline caps and thresholds
///
/// # Errors
///
/// Returns `InvalidCalibration` for a bad declared size, `InvalidParameter`
/// for an unusable configuration, and `DegenerateImage` for a blank image
/// when `config.reject_blank` is set. A blank image otherwise yields a
/// zeroed record.
///
/// # Examples
///
/// ```
/// use firma_analysis::extract_parameters;
/// use firma_core::{AnalysisConfig, CalibrationInfo, RasterImage};
///
/// let mut pm = RasterImage::new_with_value(240, 50, 255).unwrap().to_mut();
/// pm.fill_rect(20, 20, 200, 10, 0);
/// let image: RasterImage = pm.into();
///
/// let info = CalibrationInfo::new(24.0, 5.0).unwrap();
/// let params = extract_parameters(&image, &info, &AnalysisConfig::default()).unwrap();
/// assert_eq!(params.stroke_width.mean_mm, 1.0);
/// assert_eq!(params.curvature_metrics.sharp_corners, 0);
/// ```
pub fn extract_parameters(
    image: &RasterImage,
    calibration: &CalibrationInfo,
    config: &AnalysisConfig,
) -> AnalysisResult<SignatureParameters> {
    let extractor = FloodFillExtractor::new(config.min_contour_points);
    extract_parameters_with(image, calibration, config, &extractor)
}

/// [`extract_parameters`] with a caller-supplied contour extractor.
pub fn extract_parameters_with(
    image: &RasterImage,
    calibration: &CalibrationInfo,
    config: &AnalysisConfig,
    extractor: &dyn ContourExtractor,
) -> AnalysisResult<SignatureParameters> {
    config.validate()?;
    let prepared = prepare(image, calibration, config)?;
    let cal = prepared.calibration;
    let working = &prepared.image;

    let binarization = binarize(working, config.polarity)?;
    let mask = &binarization.mask;
    if mask.is_blank() {
        tracing::warn!("no foreground pixels after binarization");
        if config.reject_blank {
            return Err(Error::DegenerateImage.into());
        }
    }

    let dist = distance_transform(mask)?;
    let skeleton = extract_skeleton(mask, &dist)?;
    let contours = extractor.extract(mask)?;
    tracing::debug!(
        skeleton_points = skeleton.len(),
        contours = contours.len(),
        "segmentation done"
    );

    let stroke_width = analyze_stroke_width(mask, &dist, &skeleton, &contours, &cal, config);
    let pressure_points = analyze_pressure(working, mask, config.polarity);
    let curvature_metrics = analyze_curvature(&contours, &cal, config);
    let spatial_distribution = analyze_spatial(mask);
    let connectivity = analyze_connectivity(mask, &contours, stroke_width.mean_mm, &cal);
    let feature_points = analyze_feature_points(mask, &contours, &cal, config);
    let writing = analyze_writing(&contours, curvature_metrics.average_curvature, &cal, config);
    let image_quality = analyze_quality(working, mask);

    let (ink_width_mm, ink_height_mm) = mask.bounding_box().map_or((0.0, 0.0), |b| {
        (cal.px_to_mm(b.w as f64), cal.px_to_mm(b.h as f64))
    });

    let dimensions = Dimensions {
        pixel_width: prepared.input_width,
        pixel_height: prepared.input_height,
        working_width: working.width(),
        working_height: working.height(),
        real_width_mm: calibration.width_mm,
        real_height_mm: calibration.height_mm,
        aspect_ratio: calibration.aspect_ratio(),
        pixels_per_mm: cal.pixels_per_mm,
        downscale_ratio: cal.scale,
        ink_width_mm,
        ink_height_mm,
    };

    tracing::info!(
        mean_width_mm = stroke_width.mean_mm,
        components = connectivity.connected_components,
        stroke_length_mm = connectivity.total_stroke_length_mm,
        quality = image_quality.quality,
        "extracted signature parameters"
    );

    Ok(SignatureParameters {
        dimensions,
        stroke_width,
        pressure_points,
        curvature_metrics,
        spatial_distribution,
        connectivity,
        feature_points,
        writing,
        image_quality,
    })
}
