//! Data model for the SVG viewer
//!
//! Two pieces: the viewer's configuration (which variant of the behavior is
//! active) and its single piece of transient state (the fetched document).

pub mod config;
pub mod state;

// Re-export commonly used types
pub use config::{RenderMode, ViewerConfig, DEFAULT_BASE_URL};
pub use state::ViewerState;
