//! Image format regression test
//!
//! Writes synthetic signatures through the `image` encoders and reads
//! them back through `read_image` / `decode_image`.

use firma_io::{IoError, decode_image, encode_png, read_image};
use firma_test::synth;
use firma_test::{RegParams, regout_dir};

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    let sig = synth::synthetic_signature(1).unwrap();

    // --- PNG in memory ---
    let png = encode_png(&sig).unwrap();
    let back = decode_image(&png).unwrap();
    rp.check("png round trip is lossless", back == sig);

    // --- PNG on disk ---
    std::fs::create_dir_all(regout_dir()).unwrap();
    let path = format!("{}/ioformats.signature.png", regout_dir());
    std::fs::write(&path, &png).unwrap();
    let from_disk = read_image(&path).unwrap();
    rp.compare_values(sig.width() as f64, from_disk.width() as f64, 0.0);
    rp.compare_values(sig.height() as f64, from_disk.height() as f64, 0.0);
    rp.check("file contents match", from_disk == sig);

    // --- Truncated data ---
    let truncated = &png[..png.len() / 2];
    rp.check(
        "truncated png is a decode error",
        matches!(decode_image(truncated), Err(IoError::Decode(_))),
    );

    assert!(rp.cleanup());
}

#[test]
fn color_to_gray_reg() {
    let mut rp = RegParams::new("color_to_gray");

    // RGB white page with a pure black square
    let rgb = image::RgbImage::from_fn(20, 10, |x, y| {
        if (5..10).contains(&x) && (2..7).contains(&y) {
            image::Rgb([0, 0, 0])
        } else {
            image::Rgb([255, 255, 255])
        }
    });
    let mut buf = std::io::Cursor::new(Vec::new());
    rgb.write_to(&mut buf, image::ImageFormat::Png).unwrap();

    let gray = decode_image(buf.get_ref()).unwrap();
    rp.compare_values(20.0, gray.width() as f64, 0.0);
    rp.compare_values(0.0, gray.get_pixel(6, 3).unwrap() as f64, 0.0);
    rp.compare_values(255.0, gray.get_pixel(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(25.0, gray.histogram()[0] as f64, 0.0);

    assert!(rp.cleanup());
}
