//! Crate-wide error type returned by component `mount` functions.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::config::ConfigError;

/// Error returned when a component cannot be attached to the page.
///
/// None of these are fatal to the page: startup logs them per component and
/// keeps mounting the rest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// No `window` or `document` is reachable from this context.
    #[error("no window or document available")]
    NoDocument,
    /// A component root exists but one of its required parts does not.
    #[error("required element `{0}` is missing")]
    MissingElement(&'static str),
    /// The embedded configuration block was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
