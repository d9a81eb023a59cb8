use wasm_bindgen::JsValue;

/// Errors raised by the browser glue and configuration loading.
///
/// Gameplay itself never fails: out-of-bounds moves are no-ops and collisions
/// reset the board.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript call failed: {0}")]
    Js(String),
    #[error("config is not valid json: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
