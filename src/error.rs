// error.rs - Construction-time failures
//
// Frame operations never fail. Everything here happens before the first frame:
// acquiring the drawing surface and loading configuration.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FireworksError {
    /// No window, document, canvas element or 2D context.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("config validation error: `{field}` range is empty ({min} > {max})")]
    EmptyRange { field: &'static str, min: u32, max: u32 },

    #[error("config validation error: burst radius {max} exceeds {limit}")]
    BurstTooLarge { max: u32, limit: u32 },

    #[error("config validation error: trail capacity must be at least 1")]
    ZeroTrail,
}

pub type Result<T> = std::result::Result<T, FireworksError>;

impl From<FireworksError> for JsValue {
    fn from(err: FireworksError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
