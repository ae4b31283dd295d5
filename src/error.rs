//! Error type shared by every site component.
//!
//! ERROR HANDLING
//! ==============
//! Optional elements are modeled as `Option` and never reach this type.
//! Everything here is either a broken page contract (a required element is
//! missing) or a browser call that failed. Event handlers return
//! `Result<(), SiteError>` and the listener wrapper logs the error instead of
//! letting it escape into the JS runtime.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while wiring or driving the page chrome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    /// A browser global (`window`, `document`, `<html>`, `<body>`) is unavailable.
    #[error("browser global unavailable: {0}")]
    NoGlobal(&'static str),

    /// An element the page contract requires is not in the document.
    #[error("required element #{id} not found")]
    MissingElement { id: String },

    /// An element exists but is not of the expected kind (e.g. not an `<input>`).
    #[error("element #{id} is not {expected}")]
    WrongElementKind { id: String, expected: &'static str },

    /// A fragment request failed before a response arrived.
    #[error("fetch {url} failed: {message}")]
    Fetch { url: String, message: String },

    /// A fragment request returned a non-success status.
    #[error("fetch {url} returned status {status}")]
    FragmentStatus { url: String, status: u16 },

    /// A DOM or storage call threw.
    #[error("javascript error: {0}")]
    Js(String),

    /// Page-level configuration could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl SiteError {
    pub fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_owned() }
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return Self::Js(String::from(err.message()));
        }
        match value.as_string() {
            Some(text) => Self::Js(text),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

