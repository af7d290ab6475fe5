use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Global `window` handle.
///
/// # Panics
/// Panics outside a browser context.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Document handle for DOM queries.
///
/// # Panics
/// Panics when the window carries no document.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Report a recovered error to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}
