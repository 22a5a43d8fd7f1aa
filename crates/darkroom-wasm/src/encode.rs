//! Image encoding WASM bindings for export.
//!
//! ```typescript
//! import { encode_jpeg } from '@darkroom/wasm';
//!
//! const rendered = session.render();
//! const jpeg = encode_jpeg(rendered, 90);
//! await writable.write(new Blob([jpeg], { type: 'image/jpeg' }));
//! ```

use darkroom_core::encode;
use wasm_bindgen::prelude::*;

use crate::types::JsImage;

/// Encode an image as JPEG. `quality` is clamped to 1-100.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.image(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image as lossless PNG.
#[wasm_bindgen]
pub fn encode_png(image: &JsImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.image()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_image_encodes() {
        // JsValue errors only exist on wasm32, so go through the core call
        let img = JsImage::new(10, 10, vec![128u8; 300]);
        let jpeg = encode::encode_jpeg(img.image(), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
