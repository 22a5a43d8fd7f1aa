//! WASM-compatible wrapper types for image data.

use darkroom_core::Image;
use wasm_bindgen::prelude::*;

/// An RGB8 image held in WASM memory.
///
/// `pixels()` copies the buffer out to a `Uint8Array`. Keep images on the
/// WASM side between renders and only extract pixels for display.
#[wasm_bindgen]
pub struct JsImage {
    inner: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Wrap raw RGB pixel data (3 bytes per pixel, row-major order).
    ///
    /// The buffer is not validated here; the engine returns malformed
    /// images unchanged and the encoders reject them.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        Self {
            inner: Image::new(width, height, pixels),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Number of bytes in the pixel buffer.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Returns RGB pixel data as a Uint8Array copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }
}

impl JsImage {
    pub(crate) fn from_image(inner: Image) -> Self {
        Self { inner }
    }

    pub(crate) fn image(&self) -> &Image {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_image_accessors() {
        let img = JsImage::new(4, 2, vec![9u8; 24]);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.byte_length(), 24);
        assert_eq!(img.pixels(), vec![9u8; 24]);
    }

    #[test]
    fn test_from_image_round_trip() {
        let core = Image::filled(3, 3, [10, 20, 30]);
        let js = JsImage::from_image(core.clone());
        assert_eq!(js.image(), &core);
    }
}
