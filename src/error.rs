//! Error types for configuration loading and view control.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for camera view operations.
pub type CamResult<T> = Result<T, CamError>;

/// Errors raised while reading the user preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Preferences JSON did not have the expected shape.
    #[error("invalid preferences: {0}")]
    Parse(#[from] serde_json::Error),

    /// The preferences object did not have the expected shape.
    #[error("invalid preferences: {0}")]
    Decode(#[from] serde_wasm_bindgen::Error),

    /// The page did not provide the preferences global.
    #[error("preferences global `{0}` is not defined")]
    MissingGlobal(&'static str),

    /// Reading the preferences object threw in JavaScript.
    #[error("could not read preferences: {0}")]
    Js(String),
}

/// Errors raised by the camera controller and its DOM surface.
#[derive(Debug, Error)]
pub enum CamError {
    /// A required element is not present in the document.
    #[error("required element not found: {0}")]
    MissingElement(&'static str),

    /// An element exists but is not an HTML element.
    #[error("element `{0}` is not an HTML element")]
    NotHtmlElement(&'static str),

    /// A style or class write threw in JavaScript.
    #[error("DOM call `{op}` failed: {message}")]
    Dom { op: &'static str, message: String },

    /// A direction name outside the accepted set.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// A view command arrived before the controller was started.
    #[error("camera controller is not running")]
    NotStarted,

    /// Loading the preferences failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Renders a thrown JS value as text.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl CamError {
    pub(crate) fn dom(op: &'static str, value: &JsValue) -> Self {
        Self::Dom {
            op,
            message: js_message(value),
        }
    }
}
