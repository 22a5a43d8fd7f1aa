//! Decoding of photo files into [`Image`](crate::image::Image) buffers.
//!
//! Any format enabled on the `image` crate (JPEG and PNG) is accepted. The
//! EXIF orientation tag is read with `kamadak-exif` and applied so the
//! editing screen shows the photo upright.
//!
//! ```ignore
//! use darkroom_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! let image = decode_image(&bytes)?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, decode_image_no_orientation, get_orientation};
pub use types::{DecodeError, Orientation};
