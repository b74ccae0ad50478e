use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while talking to the page or the server
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        ClientError::Js(text)
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
