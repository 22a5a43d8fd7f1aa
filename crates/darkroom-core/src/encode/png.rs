//! Lossless PNG export.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};
use crate::image::Image;

/// Encode a rendered image as an 8-bit RGB PNG.
pub fn encode_png(image: &Image) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "PNG",
            reason: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}
