//! Crate error type.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A call on the underlying drawing surface failed.
    #[error("drawing surface call failed: {0}")]
    Surface(String),
    #[error("no global `window` exists")]
    NoWindow,
    #[error("canvas has no 2d rendering context")]
    NoContext,
    #[error("invalid viewport config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse viewport config: {0}")]
    Config(#[from] serde_json::Error),
    /// A zoom would have produced a degenerate scale factor.
    #[error("zoom factor {0} is not a positive finite number")]
    InvalidZoom(f64),
    #[error("refused a non-finite {0}")]
    NonFinite(&'static str),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Surface(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
