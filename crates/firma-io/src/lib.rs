//! firma-io - Image loading for firma
//!
//! Decodes any raster format supported by the `image` crate (PNG, JPEG,
//! TIFF, BMP, GIF, WebP, ...) and converts it to the 8-bit grayscale
//! [`RasterImage`] the analysis pipeline consumes. Color inputs are reduced
//! with the decoder's luma conversion; alpha is discarded.

pub mod error;

pub use error::{IoError, IoResult};

use firma_core::RasterImage;
use std::path::Path;

/// Read an image file and convert it to grayscale.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read and
/// [`IoError::Decode`] if its contents are not a decodable image.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RasterImage> {
    let path = path.as_ref();
    tracing::debug!("reading image {}", path.display());
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Decode an in-memory encoded image and convert it to grayscale.
///
/// # Errors
///
/// Returns [`IoError::Decode`] if the bytes are not a decodable image and
/// [`IoError::Core`] if the decoded image has a zero dimension.
pub fn decode_image(bytes: &[u8]) -> IoResult<RasterImage> {
    let decoded = image::load_from_memory(bytes).map_err(|e| IoError::Decode(e.to_string()))?;
    let gray = decoded.to_luma8();
    let (w, h) = gray.dimensions();
    tracing::debug!(width = w, height = h, "decoded image");
    Ok(RasterImage::from_raw(w, h, gray.into_raw())?)
}

/// Encode a grayscale image as PNG.
///
/// # Errors
///
/// Returns [`IoError::Encode`] if the encoder rejects the buffer.
pub fn encode_png(raster: &RasterImage) -> IoResult<Vec<u8>> {
    let gray = image::GrayImage::from_raw(raster.width(), raster.height(), raster.data().to_vec())
        .ok_or_else(|| IoError::Encode("buffer does not match image size".to_string()))?;
    let mut out = std::io::Cursor::new(Vec::new());
    gray.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| IoError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_image(b"definitely not an image"),
            Err(IoError::Decode(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_image("/nonexistent/firma/signature.png"),
            Err(IoError::Io(_))
        ));
    }

    #[test]
    fn test_png_preserves_pixels() {
        let img = RasterImage::from_fn(7, 3, |x, y| (x * 30 + y) as u8).unwrap();
        let png = encode_png(&img).unwrap();
        assert_eq!(decode_image(&png).unwrap(), img);
    }
}
