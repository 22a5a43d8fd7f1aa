//! JPEG export via the `image` crate's encoder.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};
use crate::image::Image;

/// Encode a rendered image as JPEG.
///
/// `quality` is clamped to 1-100. 90 is a good default for sharing.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` or
/// `EncodeError::InvalidPixelData` for malformed images.
pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            reason: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Image {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[
                    (x * 255 / width) as u8,
                    (y * 255 / height) as u8,
                    128,
                ]);
            }
        }
        Image::new(width, height, pixels)
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_jpeg(&gradient(64, 48), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let img = Image::filled(10, 10, [128, 128, 128]);
        assert!(encode_jpeg(&img, 0).is_ok());
        assert!(encode_jpeg(&img, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_single_pixel() {
        let jpeg = encode_jpeg(&Image::filled(1, 1, [255, 0, 0]), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_rejects_short_buffer() {
        let img = Image::new(10, 10, vec![0; 299]);
        assert!(matches!(
            encode_jpeg(&img, 90),
            Err(EncodeError::InvalidPixelData {
                expected: 300,
                actual: 299
            })
        ));
    }

    #[test]
    fn test_encode_jpeg_rejects_zero_dimensions() {
        let img = Image::new(0, 10, vec![]);
        assert!(matches!(
            encode_jpeg(&img, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
