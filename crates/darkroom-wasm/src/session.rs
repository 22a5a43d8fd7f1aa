//! Editing session WASM bindings.
//!
//! ```typescript
//! const session = new JsEditorSession(decoded);
//! session.select_filter('sepia');
//! session.select_option('brightness');
//! session.set_option_value('brightness', 0.8);
//! const frame = session.render(); // manual chain only
//! ```

use darkroom_core::{EditorSession, Selection};
use wasm_bindgen::prelude::*;

use crate::filters::{parse_filter, parse_option};
use crate::types::JsImage;

/// One editing screen's state: selection, sliders and render cache.
#[wasm_bindgen]
pub struct JsEditorSession {
    inner: EditorSession,
}

#[wasm_bindgen]
impl JsEditorSession {
    /// Start a session on a copy of `source`.
    #[wasm_bindgen(constructor)]
    pub fn new(source: &JsImage) -> JsEditorSession {
        Self {
            inner: EditorSession::new(source.image().clone()),
        }
    }

    /// Select a look by key, replacing any previous selection.
    pub fn select_filter(&mut self, name: &str) -> Result<(), JsValue> {
        let kind = parse_filter(name).map_err(|e| JsValue::from_str(&e))?;
        self.inner.select_filter(kind);
        Ok(())
    }

    /// Select an option by key; selecting the open option closes it.
    pub fn select_option(&mut self, name: &str) -> Result<(), JsValue> {
        let option = parse_option(name).map_err(|e| JsValue::from_str(&e))?;
        self.inner.select_option(option);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.inner.clear_selection();
    }

    /// Key of the selected look or option, or `undefined`.
    #[wasm_bindgen(getter)]
    pub fn selection(&self) -> Option<String> {
        selection_key(self.inner.selection())
    }

    /// Flip between browsing looks and editing. Returns the new mode.
    pub fn toggle_editing(&mut self) -> bool {
        self.inner.toggle_editing()
    }

    #[wasm_bindgen(getter)]
    pub fn editing(&self) -> bool {
        self.inner.is_editing()
    }

    /// Move a slider; values are clamped to -1..1.
    pub fn set_option_value(&mut self, name: &str, value: f32) -> Result<(), JsValue> {
        let option = parse_option(name).map_err(|e| JsValue::from_str(&e))?;
        self.inner.set_option_value(option, value);
        Ok(())
    }

    pub fn option_value(&self, name: &str) -> Result<f32, JsValue> {
        let option = parse_option(name).map_err(|e| JsValue::from_str(&e))?;
        Ok(self.inner.option_value(option))
    }

    pub fn reset_adjustments(&mut self) {
        self.inner.reset_adjustments();
    }

    /// Render the current state. Repeated calls without changes are cached.
    pub fn render(&mut self) -> JsImage {
        JsImage::from_image(self.inner.render().clone())
    }
}

fn selection_key(selection: Selection) -> Option<String> {
    match selection {
        Selection::None => None,
        Selection::Filter(kind) => Some(kind.key().to_string()),
        Selection::Option(option) => Some(option.key().to_string()),
    }
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_filter_then_option() {
        let mut s = JsEditorSession::new(&JsImage::new(2, 2, vec![90u8; 12]));
        s.select_filter("sepia").unwrap();
        s.select_option("brightness").unwrap();
        s.set_option_value("brightness", 0.8).unwrap();
        assert_eq!(s.selection().as_deref(), Some("brightness"));
        assert_eq!(s.option_value("brightness").unwrap(), 0.8);
        // 90/255 + 0.8 saturates every channel
        assert_eq!(s.render().pixels(), vec![255u8; 12]);
    }

    #[wasm_bindgen_test]
    fn test_unknown_names_throw() {
        let mut s = JsEditorSession::new(&JsImage::new(1, 1, vec![0, 0, 0]));
        assert!(s.select_filter("polaroid").is_err());
        assert!(s.set_option_value("sharpen", 0.1).is_err());
    }
}
