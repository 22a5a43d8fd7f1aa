//! Container-agnostic decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use tracing::debug;

use super::{DecodeError, Orientation};
use crate::image::Image;

/// Decode a photo and rotate/flip it upright per its EXIF orientation.
///
/// # Errors
///
/// Returns `DecodeError::EmptyInput` for zero bytes,
/// `DecodeError::InvalidFormat` when no enabled format matches, and
/// `DecodeError::CorruptedFile` when decoding itself fails.
pub fn decode_image(bytes: &[u8]) -> Result<Image, DecodeError> {
    let orientation = get_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    if orientation != Orientation::Normal {
        debug!(?orientation, "Applying EXIF orientation");
    }
    Ok(Image::from_rgb_image(
        apply_orientation(img, orientation).into_rgb8(),
    ))
}

/// Decode a photo exactly as stored, ignoring EXIF orientation.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<Image, DecodeError> {
    let img = decode_dynamic(bytes)?;
    Ok(Image::from_rgb_image(img.into_rgb8()))
}

/// Read the EXIF orientation tag.
///
/// Returns `Orientation::Normal` when there is no EXIF block or no
/// orientation tag.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
