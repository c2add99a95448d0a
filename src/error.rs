//! Error types for page binding.
//!
//! Nothing here is surfaced to visitors. Initializers propagate these with `?`
//! and the mount loop in [`crate::site`] logs them, leaving the remaining
//! widgets bound.

use crate::config::ConfigError;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while binding behavior to the page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window object")]
    MissingWindow,
    /// The window has no `document`.
    #[error("window has no document")]
    MissingDocument,
    /// The document has no `<head>` to attach to.
    #[error("document has no <head>")]
    MissingHead,
    /// A browser API call threw.
    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },
    /// The inline configuration block was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl SiteError {
    /// Wrap a thrown `JsValue`, keeping its string form when it has one.
    pub(crate) fn js(context: &'static str, value: wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}
