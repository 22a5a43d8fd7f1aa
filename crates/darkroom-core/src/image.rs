//! Core image and extent types.
//!
//! An [`Image`] is the value the UI collaborator hands to the engine and gets
//! back for display: 8-bit RGB, row-major, immutable once produced. Every
//! transform takes an `&Image` and returns a fresh one.

use serde::{Deserialize, Serialize};

/// Pixel rectangle describing the valid bounds of an image or working buffer.
///
/// The origin may be negative: transforms such as blur grow a buffer past the
/// source bounds on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Left edge in pixels.
    pub x: i64,
    /// Top edge in pixels.
    pub y: i64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent {
    /// Create a new extent.
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Extent of an image anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if the extent covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Grow the extent by `amount` pixels on every side.
    pub fn outset(&self, amount: u32) -> Self {
        Self {
            x: self.x - amount as i64,
            y: self.y - amount as i64,
            width: self.width + 2 * amount,
            height: self.height + 2 * amount,
        }
    }

    /// Check if `other` lies entirely inside this extent.
    pub fn contains(&self, other: &Extent) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl Image {
    /// Create a new Image with the given dimensions and pixel data.
    ///
    /// The buffer length is not checked here; the engine treats a mismatched
    /// buffer as malformed input and falls back to the source.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a solid-color image.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self::new(width, height, pixels)
    }

    /// Create an Image from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an image::RgbImage.
    ///
    /// Returns `None` if the buffer does not match the dimensions.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// The image's extent, anchored at the origin.
    pub fn extent(&self) -> Extent {
        Extent::from_size(self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte length the pixel buffer must have for the stated dimensions.
    pub fn expected_len(&self) -> usize {
        self.pixel_count() * 3
    }

    /// Check that the image has a non-zero size and a matching buffer.
    pub fn is_well_formed(&self) -> bool {
        !self.is_empty() && self.pixels.len() == self.expected_len()
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// RGB value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels
            .get(idx..idx + 3)
            .map(|p| [p[0], p[1], p[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let img = Image::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.expected_len(), 15000);
        assert!(img.is_well_formed());
        assert_eq!(img.extent(), Extent::new(0, 0, 100, 50));
    }

    #[test]
    fn test_image_empty() {
        let img = Image::new(0, 0, vec![]);
        assert!(img.is_empty());
        assert!(!img.is_well_formed());
    }

    #[test]
    fn test_image_short_buffer_is_malformed() {
        let img = Image::new(4, 4, vec![0u8; 10]);
        assert!(!img.is_empty());
        assert!(!img.is_well_formed());
        assert!(img.to_rgb_image().is_none());
    }

    #[test]
    fn test_filled_and_pixel_lookup() {
        let img = Image::filled(3, 2, [10, 20, 30]);
        assert_eq!(img.pixels.len(), 18);
        assert_eq!(img.pixel(2, 1), Some([10, 20, 30]));
        assert_eq!(img.pixel(3, 0), None);
    }

    #[test]
    fn test_rgb_image_conversion() {
        let img = Image::filled(5, 4, [1, 2, 3]);
        let rgb = img.to_rgb_image().unwrap();
        assert_eq!(Image::from_rgb_image(rgb), img);
    }

    #[test]
    fn test_extent_outset_and_contains() {
        let ext = Extent::from_size(10, 8);
        let grown = ext.outset(3);
        assert_eq!(grown, Extent::new(-3, -3, 16, 14));
        assert!(grown.contains(&ext));
        assert!(!ext.contains(&grown));
        assert_eq!(grown.right(), 13);
        assert_eq!(grown.bottom(), 11);
    }

    #[test]
    fn test_extent_empty() {
        assert!(Extent::from_size(0, 5).is_empty());
        assert!(!Extent::from_size(1, 1).is_empty());
        assert_eq!(Extent::from_size(3, 4).area(), 12);
    }
}
