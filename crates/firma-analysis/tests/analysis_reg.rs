//! Regression tests for single-image parameter extraction
//!
//! Covers calibrated measurements on simple shapes, blank input, value
//! ranges, determinism, resolution independence and ink polarity.

use firma_analysis::{SignatureParameters, extract_parameters};
use firma_core::{AnalysisConfig, CalibrationInfo, InkPolarity, RasterImage};
use firma_test::RegParams;
use firma_test::synth;

fn bar_params(width_mm: f64, height_mm: f64) -> SignatureParameters {
    // 200x10 bar on a 240x50 page
    let bar = synth::horizontal_bar(240, 50, 20, 20, 200, 10).unwrap();
    let info = CalibrationInfo::new(width_mm, height_mm).unwrap();
    extract_parameters(&bar, &info, &AnalysisConfig::default()).unwrap()
}

fn check_ranges(rp: &mut RegParams, p: &SignatureParameters) {
    rp.compare_range(0.0, 1.0, p.stroke_width.coverage_ratio);
    rp.compare_range(0.0, 1.0, p.spatial_distribution.center_of_mass_x);
    rp.compare_range(0.0, 1.0, p.spatial_distribution.center_of_mass_y);
    rp.compare_range(0.0, 1.0, p.spatial_distribution.ink_density);
    rp.compare_range(0.0, 1.0, p.spatial_distribution.bbox_fill_ratio);
    rp.compare_range(0.0, 1.0, p.spatial_distribution.overlap_ratio);
    rp.compare_range(0.0, 1.0, p.connectivity.stroke_complexity);
    rp.compare_range(0.0, 1.0, p.pressure_points.mean_pressure);
    rp.compare_range(0.0, 1.0, p.pressure_points.pressure_variation);
    rp.compare_range(0.0, 1.0, p.image_quality.background_noise);
    rp.compare_range(0.0, 1.0, p.image_quality.contrast_level);
    rp.compare_range(0.0, 1.0, p.image_quality.quality);
    rp.compare_range(-90.0, 90.0, p.writing.inclination_deg);
    for mm in [
        p.stroke_width.min_mm,
        p.stroke_width.max_mm,
        p.stroke_width.mean_mm,
        p.curvature_metrics.total_curve_length_mm,
        p.connectivity.total_stroke_length_mm,
        p.writing.baseline_deviation_mm,
        p.writing.average_spacing_mm,
        p.dimensions.ink_width_mm,
        p.dimensions.ink_height_mm,
        p.feature_points.average_loop_area_mm2,
    ] {
        rp.compare_range(0.0, f64::MAX, mm);
    }
    rp.check("velocity floor", p.writing.velocity >= 0.1);
    rp.check(
        "width ordering",
        p.stroke_width.min_mm <= p.stroke_width.mean_mm
            && p.stroke_width.mean_mm <= p.stroke_width.max_mm,
    );
    rp.check(
        "pressure counts add up",
        p.pressure_points.high_pressure_count + p.pressure_points.low_pressure_count
            == p.pressure_points.sample_count,
    );
}

#[test]
fn analysis_bar_reg() {
    let mut rp = RegParams::new("analysis_bar");

    // 10 pixels per millimeter: a 10 px bar is 1 mm wide and 20 mm long
    let p = bar_params(24.0, 5.0);
    rp.compare_values(10.0, p.dimensions.pixels_per_mm, 1e-12);
    rp.compare_values(1.0, p.dimensions.downscale_ratio, 0.0);
    rp.compare_values(1.0, p.stroke_width.mean_mm, 1e-12);
    rp.compare_values(20.0, p.connectivity.total_stroke_length_mm, 1e-9);
    rp.compare_values(1.0, p.connectivity.connected_components as f64, 0.0);
    rp.compare_values(0.0, p.connectivity.gaps as f64, 0.0);
    rp.compare_values(0.0, p.curvature_metrics.sharp_corners as f64, 0.0);
    rp.compare_values(0.0, p.writing.inclination_deg, 1e-9);
    rp.compare_values(20.0, p.dimensions.ink_width_mm, 1e-9);
    rp.compare_values(1.0, p.dimensions.ink_height_mm, 1e-9);
    rp.compare_values(24.0 / 5.0, p.dimensions.aspect_ratio, 1e-12);
    rp.compare_values(1.0, p.image_quality.quality, 1e-12);
    rp.compare_values(1.0, p.spatial_distribution.bbox_fill_ratio, 1e-12);
    rp.compare_values(2000.0 / 2424.0, p.spatial_distribution.overlap_ratio, 1e-12);
    rp.compare_values(0.0, p.feature_points.average_loop_area_mm2, 0.0);
    check_ranges(&mut rp, &p);

    let start = p.feature_points.start_point.unwrap();
    rp.compare_values(2.0, start.x, 1e-12);
    rp.compare_values(2.0, start.y, 1e-12);

    rp.write_json("bar", &p).unwrap();
    assert!(rp.cleanup());
}

#[test]
fn analysis_blank_reg() {
    let mut rp = RegParams::new("analysis_blank");

    let page = synth::blank_page(400, 100).unwrap();
    let info = CalibrationInfo::new(40.0, 10.0).unwrap();
    let p = extract_parameters(&page, &info, &AnalysisConfig::default()).unwrap();

    rp.compare_values(0.0, p.connectivity.connected_components as f64, 0.0);
    rp.compare_values(0.0, p.connectivity.total_stroke_length_mm, 0.0);
    rp.compare_values(0.0, p.stroke_width.mean_mm, 0.0);
    rp.compare_values(0.0, p.pressure_points.sample_count as f64, 0.0);
    rp.compare_values(0.5, p.spatial_distribution.center_of_mass_x, 0.0);
    rp.compare_values(0.5, p.spatial_distribution.center_of_mass_y, 0.0);
    rp.compare_values(0.0, p.image_quality.contrast_level, 0.0);
    rp.compare_values(0.0, p.spatial_distribution.overlap_ratio, 0.0);
    rp.compare_values(0.0, p.connectivity.letter_connections as f64, 0.0);
    rp.check("no start point", p.feature_points.start_point.is_none());
    check_ranges(&mut rp, &p);

    assert!(rp.cleanup());
}

#[test]
fn analysis_signature_reg() {
    let mut rp = RegParams::new("analysis_signature");

    let img = synth::synthetic_signature(1).unwrap();
    let info = CalibrationInfo::new(40.0, 15.0).unwrap();
    let config = AnalysisConfig::default();
    let p = extract_parameters(&img, &info, &config).unwrap();

    rp.compare_values(4.0, p.connectivity.connected_components as f64, 0.0);
    rp.compare_values(3.0, p.connectivity.gaps as f64, 0.0);
    // Strokes are 8 to 10 px thick at 10 px/mm
    rp.compare_range(0.6, 1.2, p.stroke_width.mean_mm);
    rp.check("has width samples", p.stroke_width.sample_count > 0);
    rp.check("has ink extent", p.dimensions.ink_width_mm > 30.0);
    rp.check("spacing measured", p.writing.average_spacing_mm > 0.0);
    check_ranges(&mut rp, &p);

    // Same input, same record
    let again = extract_parameters(&img, &info, &config).unwrap();
    rp.check("extraction is deterministic", p == again);

    rp.write_json("signature", &p).unwrap();
    assert!(rp.cleanup());
}

#[test]
fn analysis_scaling_reg() {
    let mut rp = RegParams::new("analysis_scaling");

    // Declaring twice the real size halves pixels/mm and doubles lengths
    let base = bar_params(24.0, 5.0);
    let doubled = bar_params(48.0, 10.0);
    rp.compare_values(5.0, doubled.dimensions.pixels_per_mm, 1e-12);
    rp.compare_values(
        2.0 * base.stroke_width.mean_mm,
        doubled.stroke_width.mean_mm,
        1e-9,
    );
    rp.compare_values(
        2.0 * base.connectivity.total_stroke_length_mm,
        doubled.connectivity.total_stroke_length_mm,
        1e-9,
    );
    rp.compare_values(
        2.0 * base.curvature_metrics.total_curve_length_mm,
        doubled.curvature_metrics.total_curve_length_mm,
        1e-9,
    );
    // Unitless values do not move
    rp.compare_values(
        base.spatial_distribution.ink_density,
        doubled.spatial_distribution.ink_density,
        0.0,
    );
    rp.compare_values(
        base.connectivity.stroke_complexity,
        doubled.connectivity.stroke_complexity,
        0.0,
    );

    assert!(rp.cleanup());
}

#[test]
fn analysis_downscale_reg() {
    let mut rp = RegParams::new("analysis_downscale");

    let info = CalibrationInfo::new(40.0, 15.0).unwrap();
    let config = AnalysisConfig::default().with_max_dimension(400);

    let small_img = synth::synthetic_signature(1).unwrap();
    let large_img = synth::synthetic_signature(2).unwrap();
    let small = extract_parameters(&small_img, &info, &config).unwrap();
    let large = extract_parameters(&large_img, &info, &config).unwrap();

    rp.compare_values(1.0, small.dimensions.downscale_ratio, 0.0);
    rp.compare_values(0.5, large.dimensions.downscale_ratio, 1e-12);
    rp.compare_values(800.0, large.dimensions.pixel_width as f64, 0.0);
    rp.compare_values(400.0, large.dimensions.working_width as f64, 0.0);
    rp.compare_values(
        small.dimensions.pixels_per_mm,
        large.dimensions.pixels_per_mm,
        1e-12,
    );

    // Millimeter measurements survive the resampling
    rp.compare_values(
        small.stroke_width.mean_mm,
        large.stroke_width.mean_mm,
        0.15,
    );
    let rel = (large.connectivity.total_stroke_length_mm
        - small.connectivity.total_stroke_length_mm)
        .abs()
        / small.connectivity.total_stroke_length_mm;
    rp.compare_range(0.0, 0.2, rel);
    rp.compare_values(
        small.dimensions.ink_width_mm,
        large.dimensions.ink_width_mm,
        0.2,
    );

    assert!(rp.cleanup());
}

#[test]
fn analysis_loop_reg() {
    let mut rp = RegParams::new("analysis_loop");

    // Ring of outer radius 3 mm around a 1.5 mm hole, at 10 and 20 px/mm
    let info = CalibrationInfo::new(10.0, 10.0).unwrap();
    let config = AnalysisConfig::default();
    let small = synth::ring(100, 100, 50.0, 50.0, 30.0, 15.0).unwrap();
    let large = synth::ring(200, 200, 100.0, 100.0, 60.0, 30.0).unwrap();
    let p_small = extract_parameters(&small, &info, &config).unwrap();
    let p_large = extract_parameters(&large, &info, &config).unwrap();

    let disc_mm2 = std::f64::consts::PI * 9.0;
    rp.compare_values(disc_mm2, p_small.feature_points.average_loop_area_mm2, 0.5);
    rp.compare_values(disc_mm2, p_large.feature_points.average_loop_area_mm2, 0.25);
    check_ranges(&mut rp, &p_small);
    check_ranges(&mut rp, &p_large);

    assert!(rp.cleanup());
}

#[test]
fn analysis_many_components_reg() {
    let mut rp = RegParams::new("analysis_many_components");

    // 100x100 grid of 4x4 dots on a 6 px pitch, 10 px/mm
    let img = RasterImage::from_fn(600, 600, |x, y| {
        if (1..5).contains(&(x % 6)) && (1..5).contains(&(y % 6)) {
            synth::INK
        } else {
            synth::PAPER
        }
    })
    .unwrap();
    let info = CalibrationInfo::new(60.0, 60.0).unwrap();
    let p = extract_parameters(&img, &info, &AnalysisConfig::default()).unwrap();

    rp.compare_values(10000.0, p.connectivity.connected_components as f64, 0.0);
    // Mean distance between random points of a square is about 0.52 of its side
    rp.compare_range(25.0, 37.0, p.writing.average_spacing_mm);
    check_ranges(&mut rp, &p);

    assert!(rp.cleanup());
}

#[test]
fn analysis_polarity_reg() {
    let mut rp = RegParams::new("analysis_polarity");

    let img = synth::synthetic_signature(1).unwrap();
    let inverted = synth::invert(&img).unwrap();
    let info = CalibrationInfo::new(40.0, 15.0).unwrap();

    let dark = extract_parameters(&img, &info, &AnalysisConfig::default()).unwrap();
    let light = extract_parameters(
        &inverted,
        &info,
        &AnalysisConfig::default().with_polarity(InkPolarity::LightInk),
    )
    .unwrap();

    rp.compare_values(
        dark.connectivity.connected_components as f64,
        light.connectivity.connected_components as f64,
        0.0,
    );
    rp.compare_values(dark.stroke_width.mean_mm, light.stroke_width.mean_mm, 1e-12);
    rp.compare_values(
        dark.connectivity.total_stroke_length_mm,
        light.connectivity.total_stroke_length_mm,
        1e-9,
    );
    rp.compare_values(dark.writing.inclination_deg, light.writing.inclination_deg, 1e-9);
    rp.compare_values(
        dark.pressure_points.mean_pressure,
        light.pressure_points.mean_pressure,
        1e-12,
    );
    rp.compare_values(dark.image_quality.quality, light.image_quality.quality, 1e-12);

    assert!(rp.cleanup());
}
