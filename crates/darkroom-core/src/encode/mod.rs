//! Encoding of rendered images for export and sharing.
//!
//! ```ignore
//! use darkroom_core::encode::encode_jpeg;
//!
//! let jpeg_bytes = encode_jpeg(&rendered, 90)?;
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;
mod png;

use thiserror::Error;

use crate::image::Image;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

/// Errors that can occur while encoding an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the image
    #[error("{format} encoding failed: {reason}")]
    EncodingFailed {
        format: &'static str,
        reason: String,
    },
}

/// Reject images the codecs cannot represent.
fn validate(image: &Image) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }
    if image.pixels.len() != image.expected_len() {
        return Err(EncodeError::InvalidPixelData {
            expected: image.expected_len(),
            actual: image.pixels.len(),
        });
    }
    Ok(())
}
