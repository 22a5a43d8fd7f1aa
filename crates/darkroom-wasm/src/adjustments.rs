//! Manual adjustment WASM bindings.
//!
//! Exposes the slider record to TypeScript and runs the manual chain.

use darkroom_core::engine;
use wasm_bindgen::prelude::*;

use crate::types::JsImage;

/// Manual adjustment values for JavaScript
#[wasm_bindgen]
pub struct AdjustmentParameters {
    inner: darkroom_core::AdjustmentParameters,
}

#[wasm_bindgen]
impl AdjustmentParameters {
    /// Create parameters at their neutral values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: darkroom_core::AdjustmentParameters::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value;
    }

    /// Exposure shift in stops
    #[wasm_bindgen(getter)]
    pub fn warmth(&self) -> f32 {
        self.inner.warmth
    }

    #[wasm_bindgen(setter)]
    pub fn set_warmth(&mut self, value: f32) {
        self.inner.warmth = value;
    }

    /// Vignette intensity
    #[wasm_bindgen(getter)]
    pub fn structure(&self) -> f32 {
        self.inner.structure
    }

    #[wasm_bindgen(setter)]
    pub fn set_structure(&mut self, value: f32) {
        self.inner.structure = value;
    }

    #[wasm_bindgen(getter)]
    pub fn blur_radius(&self) -> f32 {
        self.inner.blur_radius
    }

    #[wasm_bindgen(setter)]
    pub fn set_blur_radius(&mut self, value: f32) {
        self.inner.blur_radius = value;
    }

    /// Hue rotation in half turns
    #[wasm_bindgen(getter)]
    pub fn hue(&self) -> f32 {
        self.inner.hue
    }

    #[wasm_bindgen(setter)]
    pub fn set_hue(&mut self, value: f32) {
        self.inner.hue = value;
    }

    /// Check if all values are neutral
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Serialize to a plain JS object for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Build from a plain JS object; missing fields take neutral values
    pub fn from_json(value: JsValue) -> Result<AdjustmentParameters, JsValue> {
        let inner: darkroom_core::AdjustmentParameters =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjustmentParameters {
    pub(crate) fn inner(&self) -> &darkroom_core::AdjustmentParameters {
        &self.inner
    }
}

/// Run the five-stage manual chain.
///
/// Never throws: if any stage fails the source image comes back unchanged.
///
/// ```typescript
/// const params = new AdjustmentParameters();
/// params.brightness = 0.2;
/// params.hue = 0.5;
/// const adjusted = apply_manual_adjustments(source, params);
/// ```
#[wasm_bindgen]
pub fn apply_manual_adjustments(image: &JsImage, params: &AdjustmentParameters) -> JsImage {
    JsImage::from_image(engine::apply_manual_adjustments(
        image.image(),
        params.inner(),
    ))
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_json_round_trip() {
        let mut params = AdjustmentParameters::new();
        params.set_structure(0.7);
        let restored = AdjustmentParameters::from_json(params.to_json().unwrap()).unwrap();
        assert_eq!(restored.structure(), 0.7);
    }

    #[wasm_bindgen_test]
    fn test_from_json_partial_object() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"hue".into(), &JsValue::from_f64(0.25)).unwrap();
        let params = AdjustmentParameters::from_json(obj.into()).unwrap();
        assert_eq!(params.hue(), 0.25);
        assert_eq!(params.contrast(), 1.0);
    }
}
