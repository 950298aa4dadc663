//! Error types for the SVG viewer
//!
//! Mount-time DOM failures surface to the caller since the viewer cannot
//! proceed without a container. Fetch failures are logged and swallowed so
//! the viewer keeps showing empty content.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level viewer error type
#[derive(Debug, Clone, Error)]
pub enum ViewerError {
    /// No global `window` object (not running in a browser)
    #[error("no global `window` object")]
    NoWindow,

    /// `window` exists but carries no `document`
    #[error("no `document` on window")]
    NoDocument,

    /// The requested container element does not exist in the page
    #[error("container element `{0}` not found")]
    MissingContainer(String),

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The fetch itself failed before any HTTP response arrived
    #[error("network request failed: {0}")]
    Network(String),
}

impl ViewerError {
    /// Wrap an opaque value thrown by a DOM call.
    pub fn dom(value: JsValue) -> Self {
        ViewerError::Dom(format!("{value:?}"))
    }

    /// Wrap an opaque value thrown by the fetch machinery.
    pub fn network(value: JsValue) -> Self {
        ViewerError::Network(format!("{value:?}"))
    }
}

impl From<ViewerError> for JsValue {
    fn from(err: ViewerError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
