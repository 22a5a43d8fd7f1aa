//! Image decoding WASM bindings.
//!
//! ```typescript
//! import { decode_image } from '@darkroom/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use darkroom_core::decode;
use wasm_bindgen::prelude::*;

use crate::types::JsImage;

/// Decode a JPEG or PNG photo, applying EXIF orientation.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode a photo as stored, ignoring EXIF orientation.
#[wasm_bindgen]
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image_no_orientation(bytes)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
