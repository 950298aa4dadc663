//! The `SvgViewer` component
//!
//! Lifecycle: construct with an optional config object, `mount` into a
//! container element by id, and the viewer renders immediately with empty
//! state, then fetches its document exactly once. Re-renders (explicit or
//! after the fetch resolves) rebuild the DOM from state and never issue a
//! second request.
//!
//! Failure policy: a non-2xx response or a network error leaves the state
//! untouched, so the page keeps showing size 0 indefinitely. The only
//! diagnostics are console logs.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::helpers::{from_js_or_default, to_js};
use crate::error::ViewerError;
use crate::fetch::{self, FetchOutcome};
use crate::models::{RenderMode, ViewerConfig, ViewerState};
use crate::render;

/// Browser component showing one SVG document fetched from the map server.
#[wasm_bindgen]
pub struct SvgViewer {
    config: ViewerConfig,
    // Shared with the one in-flight fetch effect, nothing else.
    state: Rc<RefCell<ViewerState>>,
    // `Some(id)` while mounted; the effect reads it at resolution time, so a
    // re-mount into a different container redirects the pending result and
    // `None` drops it.
    mounted: Rc<RefCell<Option<String>>>,
    fetch_attempts: u32,
    search: String,
}

#[wasm_bindgen]
impl SvgViewer {
    /// Create a viewer from a plain config object; pass `undefined` for the
    /// defaults (local server, query forwarding, raw markup rendering).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SvgViewer, JsValue> {
        let config: ViewerConfig = from_js_or_default(config, "invalid viewer config")?;
        Ok(SvgViewer {
            config,
            state: Rc::new(RefCell::new(ViewerState::new())),
            mounted: Rc::new(RefCell::new(None)),
            fetch_attempts: 0,
            search: String::new(),
        })
    }

    /// Mount into the element with id `container_id`.
    ///
    /// Renders immediately with whatever state is present, then spawns the
    /// fetch effect. The effect runs once per instance: mounting again
    /// re-renders (into the new container, which a still-pending fetch will
    /// also follow) but never issues another request.
    pub fn mount(&mut self, container_id: &str) -> Result<(), JsValue> {
        self.search = render::page_search()?;
        *self.mounted.borrow_mut() = Some(container_id.to_string());
        self.render()?;

        if self.fetch_attempts > 0 {
            return Ok(());
        }
        self.fetch_attempts += 1;

        let url = fetch::request_url(&self.config.base_url, &self.search, self.config.forward_query);
        log::debug!("fetching {url}");

        let state = Rc::clone(&self.state);
        let mounted = Rc::clone(&self.mounted);
        let search = self.search.clone();
        let mode = self.config.render_mode;
        spawn_local(async move {
            let outcome = fetch::fetch_text(&url).await;
            apply_outcome(&state, &mounted, &search, mode, outcome);
        });

        Ok(())
    }

    /// Re-render from current state. Idempotent, never triggers I/O; a no-op
    /// while unmounted.
    pub fn render(&self) -> Result<(), JsValue> {
        let mounted = self.mounted.borrow();
        let Some(container_id) = mounted.as_deref() else {
            return Ok(());
        };
        rerender(
            container_id,
            &self.state.borrow(),
            &self.search,
            self.config.render_mode,
        )?;
        Ok(())
    }

    /// Unmount: clear the container and stop an in-flight fetch from touching
    /// the DOM when it resolves. The fetched state itself is kept.
    pub fn unmount(&mut self) -> Result<(), JsValue> {
        let Some(container_id) = self.mounted.borrow_mut().take() else {
            return Ok(());
        };
        let document = render::document()?;
        if let Ok(container) = render::container(&document, &container_id) {
            container.set_inner_html("");
        }
        Ok(())
    }

    /// Character length of the fetched document (0 until a fetch succeeds).
    pub fn svg_size(&self) -> usize {
        self.state.borrow().size()
    }

    /// The fetched document, verbatim. Empty until a fetch succeeds.
    pub fn svg_markup(&self) -> String {
        self.state.borrow().markup().to_string()
    }

    /// How many requests this instance has issued. Never exceeds 1.
    pub fn fetch_attempts(&self) -> u32 {
        self.fetch_attempts
    }

    /// The effective configuration, as a plain JS object.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(&self.config, "failed to serialize viewer config")
    }
}

/// Fold the fetch result into state and the DOM. A body arriving while
/// unmounted is dropped without touching either; failures only warn.
fn apply_outcome(
    state: &RefCell<ViewerState>,
    mounted: &RefCell<Option<String>>,
    search: &str,
    mode: RenderMode,
    outcome: Result<FetchOutcome, ViewerError>,
) {
    match outcome {
        Ok(FetchOutcome::Document(body)) => {
            let container_id = match mounted.borrow().clone() {
                Some(id) => id,
                // Unmounted while in flight; drop the result.
                None => return,
            };
            state.borrow_mut().apply_document(body);
            if let Err(err) = rerender(&container_id, &state.borrow(), search, mode) {
                log::warn!("render after fetch failed: {err}");
            }
        }
        Ok(FetchOutcome::HttpFailure { status }) => {
            log::warn!("svg request failed with status {status}");
        }
        Err(err) => {
            log::warn!("svg request failed: {err}");
        }
    }
}

fn rerender(
    container_id: &str,
    state: &ViewerState,
    search: &str,
    mode: RenderMode,
) -> Result<(), ViewerError> {
    let document = render::document()?;
    let container = render::container(&document, container_id)?;
    render::render_into(&document, &container, state, search, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_body_is_dropped_after_unmount() {
        let state = RefCell::new(ViewerState::new());
        let mounted: RefCell<Option<String>> = RefCell::new(None);
        apply_outcome(
            &state,
            &mounted,
            "",
            RenderMode::Raw,
            Ok(FetchOutcome::Document("<svg></svg>".to_string())),
        );
        assert_eq!(state.borrow().size(), 0);
        assert!(!state.borrow().is_fetched());
    }

    #[test]
    fn http_failure_leaves_state_untouched() {
        let state = RefCell::new(ViewerState::new());
        let mounted = RefCell::new(Some("map".to_string()));
        apply_outcome(
            &state,
            &mounted,
            "",
            RenderMode::Raw,
            Ok(FetchOutcome::HttpFailure { status: 500 }),
        );
        assert_eq!(state.borrow().size(), 0);
        assert!(!state.borrow().is_fetched());
    }

    #[test]
    fn network_error_leaves_state_untouched() {
        let state = RefCell::new(ViewerState::new());
        let mounted = RefCell::new(Some("map".to_string()));
        apply_outcome(
            &state,
            &mounted,
            "",
            RenderMode::Raw,
            Err(ViewerError::Network("connection refused".to_string())),
        );
        assert_eq!(state.borrow().size(), 0);
        assert!(!state.borrow().is_fetched());
    }
}
