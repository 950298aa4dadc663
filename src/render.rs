//! DOM rendering for the viewer
//!
//! Rebuilds the container's children from current state: a paragraph echoing
//! the page query string, a paragraph with the document size, and (in raw
//! mode) the fetched markup itself. Rendering never performs I/O; the fetch
//! effect calls back in here once the document arrives.

use web_sys::{Document, Element};

use crate::error::ViewerError;
use crate::models::{RenderMode, ViewerState};

/// The page `Document`, or an error when not running in a browser.
pub fn document() -> Result<Document, ViewerError> {
    web_sys::window()
        .ok_or(ViewerError::NoWindow)?
        .document()
        .ok_or(ViewerError::NoDocument)
}

/// Current page query string, with its leading `?` when one is present.
pub fn page_search() -> Result<String, ViewerError> {
    web_sys::window()
        .ok_or(ViewerError::NoWindow)?
        .location()
        .search()
        .map_err(ViewerError::dom)
}

/// Look up the viewer's container element by id.
pub fn container(document: &Document, id: &str) -> Result<Element, ViewerError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ViewerError::MissingContainer(id.to_string()))
}

/// Render the viewer into `container`, replacing its children.
pub fn render_into(
    document: &Document,
    container: &Element,
    state: &ViewerState,
    search: &str,
    mode: RenderMode,
) -> Result<(), ViewerError> {
    container.set_inner_html("");

    let query_line = document.create_element("p").map_err(ViewerError::dom)?;
    query_line.set_text_content(Some(&format!("query: {search}")));
    container.append_child(&query_line).map_err(ViewerError::dom)?;

    let size_line = document.create_element("p").map_err(ViewerError::dom)?;
    size_line.set_text_content(Some(&format!("Size of svg: {}", state.size())));
    container.append_child(&size_line).map_err(ViewerError::dom)?;

    if mode == RenderMode::Raw {
        let markup_host = document.create_element("div").map_err(ViewerError::dom)?;
        // The local map server is trusted; the document goes in unescaped.
        markup_host.set_inner_html(state.markup());
        container.append_child(&markup_host).map_err(ViewerError::dom)?;
    }

    Ok(())
}
