//! URL helpers for the documents plugin routes

use url::Url;

use crate::error::RenderError;

/// Route every documents plugin asset and file is served under
pub const PLUGIN_ROUTE: &str = "/api/plugin/timeline_plugin_documents/";

/// Percent-encode a single path component.
pub fn encode_component(component: &str) -> String {
    urlencoding::encode(component).into_owned()
}

/// Resolve `relative` against the plugin route of `origin`.
///
/// `origin` must be an absolute URL (usually `window.location.origin`).
/// `relative` must already be percent-encoded.
pub fn plugin_url(origin: &str, relative: &str) -> Result<Url, RenderError> {
    let base = Url::parse(origin)
        .map_err(|e| RenderError::config(format!("invalid origin '{}': {}", origin, e)))?;
    base.join(PLUGIN_ROUTE)
        .and_then(|route| route.join(relative))
        .map_err(|e| RenderError::config(format!("invalid plugin path '{}': {}", relative, e)))
}
