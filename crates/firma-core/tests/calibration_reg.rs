//! Regression tests for calibration and the core grids built from
//! synthetic pages

use firma_core::{BinaryMask, BoundingBox, Calibration, CalibrationInfo, Error, PixelPoint};
use firma_test::RegParams;
use firma_test::synth::{self, INK};

#[test]
fn calibration_reg() {
    let mut rp = RegParams::new("calibration");

    // 400x150 at 40x15 mm: 10 px/mm on both axes
    let info = CalibrationInfo::new(40.0, 15.0).unwrap();
    let cal = Calibration::from_dimensions(400, 150, &info).unwrap();
    rp.compare_values(10.0, cal.pixels_per_mm, 1e-12);
    rp.compare_values(1.0, cal.scale, 0.0);
    rp.compare_values(4.0, cal.px_to_mm(40.0), 1e-12);
    rp.compare_values(1.0, cal.px2_to_mm2(100.0), 1e-12);

    // Anisotropic input: the mean ratio is applied to both axes
    let skewed = Calibration::from_dimensions(400, 300, &info).unwrap();
    rp.compare_values(10.0, skewed.pixels_per_mm_x, 1e-12);
    rp.compare_values(20.0, skewed.pixels_per_mm_y, 1e-12);
    rp.compare_values(15.0, skewed.pixels_per_mm, 1e-12);

    // Halving the resolution halves the factor and keeps mm values
    let half = cal.rescaled(0.5, 0.5);
    rp.compare_values(5.0, half.pixels_per_mm, 1e-12);
    rp.compare_values(0.5, half.scale, 0.0);
    rp.compare_values(cal.px_to_mm(40.0), half.px_to_mm(20.0), 1e-12);

    let p = cal.point_to_mm(PixelPoint::new(25, 5));
    rp.compare_values(2.5, p.x, 1e-12);
    rp.compare_values(0.5, p.y, 1e-12);

    // Doubling the declared size halves the factor
    let doubled = CalibrationInfo::new(80.0, 30.0).unwrap();
    let cal2 = Calibration::from_dimensions(400, 150, &doubled).unwrap();
    rp.compare_values(cal.pixels_per_mm / 2.0, cal2.pixels_per_mm, 1e-12);

    for (w, h) in [(0.0, 10.0), (-1.0, 10.0), (10.0, f64::NAN), (f64::INFINITY, 1.0)] {
        rp.check(
            "invalid calibration is rejected",
            matches!(
                CalibrationInfo::new(w, h),
                Err(Error::InvalidCalibration { .. })
            ),
        );
    }
    rp.check(
        "zero-size image is rejected",
        matches!(
            Calibration::from_dimensions(0, 10, &info),
            Err(Error::InvalidDimension { .. })
        ),
    );

    assert!(rp.cleanup());
}

#[test]
fn mask_from_synthetic_reg() {
    let mut rp = RegParams::new("mask_from_synthetic");

    let img = synth::horizontal_bar(60, 30, 10, 12, 40, 4).unwrap();
    let mask = BinaryMask::from_fn(img.width(), img.height(), |x, y| {
        img.get_pixel(x, y) == Some(INK)
    })
    .unwrap();

    rp.compare_values(160.0, mask.count() as f64, 0.0);
    rp.check(
        "bounding box matches the bar",
        mask.bounding_box() == Some(BoundingBox::new(10, 12, 40, 4)),
    );
    rp.check(
        "first foreground in raster order",
        mask.first_foreground() == Some(PixelPoint::new(10, 12)),
    );
    rp.check(
        "last foreground in raster order",
        mask.last_foreground() == Some(PixelPoint::new(49, 15)),
    );

    let blank = BinaryMask::from_fn(60, 30, |_, _| false).unwrap();
    rp.check("blank mask", blank.is_blank() && blank.bounding_box().is_none());

    assert!(rp.cleanup());
}
