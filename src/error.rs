use wasm_bindgen::JsValue;

/// Failures that keep the page controller from starting.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document is not an HTML document")]
    NotHtmlDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl UiError {
    pub fn js(value: &JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
