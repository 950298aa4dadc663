//! Viewer state
//!
//! One transient text blob: the SVG document, owned exclusively by the viewer
//! instance. It starts empty, is replaced wholesale when the single fetch
//! succeeds, and is discarded with the instance. A failed fetch never touches
//! it, so "still loading", "failed", and "empty document" all look the same.

/// The viewer's only piece of state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    svg: String,
    fetched: bool,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored document wholesale after a successful fetch.
    pub fn apply_document(&mut self, body: String) {
        self.svg = body;
        self.fetched = true;
    }

    /// Character length of the stored document. Zero until a fetch succeeds
    /// (or forever, if it never does).
    pub fn size(&self) -> usize {
        self.svg.chars().count()
    }

    /// The stored document, verbatim.
    pub fn markup(&self) -> &str {
        &self.svg
    }

    /// Whether a successful fetch has completed for this instance.
    pub fn is_fetched(&self) -> bool {
        self.fetched
    }
}
