//! JS-facing API for the SVG viewer
//!
//! The hosting page constructs an [`SvgViewer`], mounts it into a container
//! element, and the viewer takes it from there: one fetch, then re-renders
//! driven by state.
//!
//! # Module Structure
//!
//! - `helpers`: serde conversion across the JS boundary with error context
//! - `viewer`: the `SvgViewer` component itself

pub mod helpers;
pub mod viewer;

pub use viewer::SvgViewer;
