//! Viewer configuration
//!
//! The viewer historically shipped as three near-identical variants that
//! differed only in whether the page query string was forwarded and whether
//! the fetched markup was injected into the DOM or merely measured. Those
//! variants are collapsed into one component behind this config; the defaults
//! select the most feature-complete variant (forwarding on, raw rendering).

use serde::{Deserialize, Serialize};

/// Address of the local map server the original frontend was built against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// How the fetched document is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Only report the size of the fetched document.
    SizeOnly,
    /// Inject the fetched markup into the page verbatim (trusted server).
    Raw,
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::Raw
    }
}

/// Viewer configuration, deserializable from a plain JS object.
///
/// Every field is optional on the JS side; omitted fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the SVG server; `/svg` is appended to it.
    pub base_url: String,
    /// Forward the hosting page's query string to the server verbatim.
    pub forward_query: bool,
    pub render_mode: RenderMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            forward_query: true,
            render_mode: RenderMode::Raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.forward_query);
        assert_eq!(config.render_mode, RenderMode::Raw);
    }

    #[test]
    fn partial_object_keeps_remaining_defaults() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{"forward_query": false}"#).unwrap();
        assert!(!config.forward_query);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.render_mode, RenderMode::Raw);
    }

    #[test]
    fn render_mode_uses_snake_case_names() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{"render_mode": "size_only"}"#).unwrap();
        assert_eq!(config.render_mode, RenderMode::SizeOnly);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""render_mode":"size_only""#));
    }
}
