//! OSM Roadtrip SVG Viewer WASM Module
//!
//! This is the browser-side viewer for the roadtrip map server. It fetches a
//! pre-rendered SVG document from the local `/svg` endpoint once on mount and
//! displays it, forwarding the hosting page's query string to the server.

pub mod api;
pub mod error;
pub mod fetch;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use api::SvgViewer;
pub use error::ViewerError;
pub use fetch::{request_url, FetchOutcome};
pub use models::{RenderMode, ViewerConfig, ViewerState};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Roadtrip SVG viewer WASM module initialized");
}
