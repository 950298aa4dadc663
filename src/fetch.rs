//! Request construction and execution
//!
//! The viewer issues exactly one GET to `<base-url>/svg`, optionally carrying
//! the hosting page's query string verbatim. No headers, body, auth, timeout,
//! or retry; the only distinction the caller cares about is "2xx with a text
//! body" versus everything else.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::ViewerError;

/// Outcome of the single viewer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 2xx response, body decoded as UTF-8 text.
    Document(String),
    /// A response arrived but with a non-success status.
    HttpFailure { status: u16 },
}

/// Build the request URL from the configured base and the page query string.
///
/// `search` is `window.location.search` and may arrive with or without its
/// leading `?`. An empty search, or `forward_query = false`, yields the bare
/// `/svg` path. A trailing `/` on the base URL is tolerated.
pub fn request_url(base_url: &str, search: &str, forward_query: bool) -> String {
    let base = base_url.trim_end_matches('/');
    let query = search.strip_prefix('?').unwrap_or(search);
    if forward_query && !query.is_empty() {
        format!("{base}/svg?{query}")
    } else {
        format!("{base}/svg")
    }
}

/// Drive `window.fetch()` to completion and classify the outcome.
///
/// Network-level failures (connection refused, CORS rejection) come back as
/// `Err`; an HTTP response with any status is `Ok` with the status folded
/// into the outcome.
pub async fn fetch_text(url: &str) -> Result<FetchOutcome, ViewerError> {
    let window = web_sys::window().ok_or(ViewerError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(ViewerError::network)?;
    let response: Response = response.dyn_into().map_err(ViewerError::network)?;

    if !response.ok() {
        return Ok(FetchOutcome::HttpFailure {
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text().map_err(ViewerError::network)?)
        .await
        .map_err(ViewerError::network)?;
    Ok(FetchOutcome::Document(text.as_string().unwrap_or_default()))
}
