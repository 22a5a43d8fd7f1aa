//! Darkroom WASM - WebAssembly bindings for the Darkroom engine
//!
//! # Module Structure
//!
//! - `types` - `JsImage`, the RGB8 image wrapper
//! - `filters` - named looks and the option catalog
//! - `adjustments` - manual adjustment parameters and the manual chain
//! - `session` - `JsEditorSession`, selection state and cached rendering
//! - `decode` / `encode` - photo I/O
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, JsEditorSession } from '@darkroom/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const session = new JsEditorSession(decode_image(bytes));
//! session.select_filter('vintage');
//! const frame = session.render();
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod encode;
mod filters;
mod session;
mod types;

pub use adjustments::{apply_manual_adjustments, AdjustmentParameters};
pub use decode::{decode_image, decode_image_no_orientation};
pub use encode::{encode_jpeg, encode_png};
pub use filters::{
    apply_named_filter, filter_catalog, filter_display_name, filter_names, option_catalog,
    option_names,
};
pub use session::JsEditorSession;
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&format!("darkroom-wasm {} ready", version()).into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
