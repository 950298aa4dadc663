//! Shared helpers for the WASM API boundary
//!
//! Conversion between JS values and the viewer's serde types, with error
//! context attached and logged before anything crosses back into JavaScript.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Deserialize a JS value, treating `undefined`/`null` as "use the default".
pub fn from_js_or_default<T>(value: JsValue, error_context: &str) -> Result<T, JsValue>
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{error_context}: {e}");
        log::error!("{msg}");
        JsValue::from_str(&msg)
    })
}

/// Serialize a value for JavaScript with automatic error handling.
pub fn to_js<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{error_context}: {e}");
        log::error!("{msg}");
        JsValue::from_str(&msg)
    })
}
