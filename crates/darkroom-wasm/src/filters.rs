//! Named-look WASM bindings.
//!
//! Looks are addressed by their stable key (`"sepia"`, `"black_white"`,
//! `"lo_fi"`, ...) so the thumbnail strip can be driven from data.

use darkroom_core::{engine, AdjustmentOption, FilterKind};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::JsImage;

/// One row of a catalog as handed to JS.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogEntry {
    pub key: &'static str,
    pub display_name: &'static str,
    pub wired: bool,
}

pub(crate) fn filter_entries() -> Vec<CatalogEntry> {
    FilterKind::ALL
        .iter()
        .map(|k| CatalogEntry {
            key: k.key(),
            display_name: k.display_name(),
            wired: true,
        })
        .collect()
}

pub(crate) fn option_entries() -> Vec<CatalogEntry> {
    AdjustmentOption::ALL
        .iter()
        .map(|o| CatalogEntry {
            key: o.key(),
            display_name: o.display_name(),
            wired: o.is_wired(),
        })
        .collect()
}

pub(crate) fn parse_filter(name: &str) -> Result<FilterKind, String> {
    FilterKind::from_key(name).ok_or_else(|| format!("Unknown filter: {}", name))
}

pub(crate) fn parse_option(name: &str) -> Result<AdjustmentOption, String> {
    AdjustmentOption::from_key(name).ok_or_else(|| format!("Unknown adjustment option: {}", name))
}

/// Apply a named look.
///
/// Throws only for an unknown name; rendering failures return the source.
///
/// ```typescript
/// const sepia = apply_named_filter(source, 'sepia');
/// ```
#[wasm_bindgen]
pub fn apply_named_filter(image: &JsImage, name: &str) -> Result<JsImage, JsValue> {
    let kind = parse_filter(name).map_err(|e| JsValue::from_str(&e))?;
    Ok(JsImage::from_image(engine::apply_named_filter(
        image.image(),
        kind,
    )))
}

/// Keys of every look, in thumbnail strip order.
#[wasm_bindgen]
pub fn filter_names() -> Vec<String> {
    FilterKind::ALL.iter().map(|k| k.key().to_string()).collect()
}

/// Display name for a look key, e.g. `"Black & White"`.
#[wasm_bindgen]
pub fn filter_display_name(name: &str) -> Option<String> {
    FilterKind::from_key(name).map(|k| k.display_name().to_string())
}

/// Keys of every adjustment option, in toolbar order.
#[wasm_bindgen]
pub fn option_names() -> Vec<String> {
    AdjustmentOption::ALL
        .iter()
        .map(|o| o.key().to_string())
        .collect()
}

/// Every look as `{ key, displayName, wired }`, in thumbnail strip order.
///
/// ```typescript
/// for (const { key, displayName } of filter_catalog()) { ... }
/// ```
#[wasm_bindgen]
pub fn filter_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&filter_entries()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Every adjustment option as `{ key, displayName, wired }`.
///
/// `wired` is `false` for options whose sliders do not affect the render.
#[wasm_bindgen]
pub fn option_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&option_entries()).map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_named_filter_by_key() {
        let image = JsImage::new(2, 1, vec![200, 100, 50, 10, 20, 30]);
        let out = apply_named_filter(&image, "black_white").unwrap();
        let px = out.pixels();
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    #[wasm_bindgen_test]
    fn test_option_catalog_is_array() {
        let catalog = option_catalog().unwrap();
        let array = js_sys::Array::from(&catalog);
        assert_eq!(array.length(), AdjustmentOption::ALL.len() as u32);
        let first = array.get(0);
        let key = js_sys::Reflect::get(&first, &JsValue::from_str("displayName")).unwrap();
        assert_eq!(
            key.as_string().as_deref(),
            Some(AdjustmentOption::ALL[0].display_name())
        );
    }

    #[wasm_bindgen_test]
    fn test_apply_named_filter_unknown() {
        let image = JsImage::new(1, 1, vec![0, 0, 0]);
        assert!(apply_named_filter(&image, "polaroid").is_err());
    }
}
