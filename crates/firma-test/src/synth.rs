//! Synthetic signature images
//!
//! Deterministic grayscale inputs for regression tests: blank pages, bars,
//! rings and a small multi-stroke "signature" that can be rendered at any
//! integer scale so the same geometry is available at several resolutions.

use firma_core::{RasterImage, Result};

/// Paper intensity used by the builders.
pub const PAPER: u8 = 255;
/// Ink intensity used by the builders.
pub const INK: u8 = 0;

/// Width of [`synthetic_signature`] at scale 1.
pub const SIGNATURE_BASE_WIDTH: u32 = 400;
/// Height of [`synthetic_signature`] at scale 1.
pub const SIGNATURE_BASE_HEIGHT: u32 = 150;

/// Uniform white page.
pub fn blank_page(width: u32, height: u32) -> Result<RasterImage> {
    RasterImage::new_with_value(width, height, PAPER)
}

/// White page with one black rectangle `[x, x+len) × [y, y+thickness)`.
pub fn horizontal_bar(
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    len: u32,
    thickness: u32,
) -> Result<RasterImage> {
    let mut pm = blank_page(width, height)?.to_mut();
    pm.fill_rect(x, y, len, thickness, INK);
    Ok(pm.into())
}

/// White page with a black annulus centered at `(cx, cy)`.
pub fn ring(
    width: u32,
    height: u32,
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
) -> Result<RasterImage> {
    RasterImage::from_fn(width, height, |x, y| {
        let d = (x as f64 + 0.5 - cx).hypot(y as f64 + 0.5 - cy);
        if d <= outer && d >= inner { INK } else { PAPER }
    })
}

/// Swap dark and light: every pixel `v` becomes `255 - v`.
pub fn invert(image: &RasterImage) -> Result<RasterImage> {
    let data = image.data().iter().map(|&v| 255 - v).collect();
    RasterImage::from_raw(image.width(), image.height(), data)
}

/// Multi-stroke signature rendered at `scale` × (400 × 150) pixels.
///
/// Strokes, in base coordinates: a ring (a loop), a slanted stroke, a
/// horizontal underline and a tall stroke reaching below the others.
pub fn synthetic_signature(scale: u32) -> Result<RasterImage> {
    synthetic_signature_with(scale, INK, PAPER)
}

/// [`synthetic_signature`] with explicit ink and paper intensities.
pub fn synthetic_signature_with(scale: u32, ink: u8, paper: u8) -> Result<RasterImage> {
    let s = scale.max(1);
    let inv = 1.0 / s as f64;
    RasterImage::from_fn(SIGNATURE_BASE_WIDTH * s, SIGNATURE_BASE_HEIGHT * s, |x, y| {
        let bx = (x as f64 + 0.5) * inv;
        let by = (y as f64 + 0.5) * inv;
        if signature_ink(bx, by) { ink } else { paper }
    })
}

fn signature_ink(x: f64, y: f64) -> bool {
    let ring = {
        let d = (x - 80.0).hypot(y - 75.0);
        (22.0..=32.0).contains(&d)
    };
    let slant = segment_distance(x, y, (140.0, 115.0), (190.0, 35.0)) <= 4.0;
    let underline = (220.0..370.0).contains(&x) && (88.0..98.0).contains(&y);
    let tall = (380.0..388.0).contains(&x) && (30.0..140.0).contains(&y);
    ring || slant || underline || tall
}

fn segment_distance(px: f64, py: f64, a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = (((px - a.0) * dx + (py - a.1) * dy) / len2).clamp(0.0, 1.0);
    (px - (a.0 + t * dx)).hypot(py - (a.1 + t * dy))
}
