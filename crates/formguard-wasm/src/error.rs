//! Errors raised while wiring validation into a page

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum AttachError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id '{0}'")]
    FormNotFound(String),

    #[error("element '{0}' is not a form")]
    NotAForm(String),

    #[error("invalid required-field selector '{0}'")]
    InvalidSelector(String),

    #[error("failed to parse options: {0}")]
    InvalidOptions(String),

    #[error("failed to parse fields: {0}")]
    InvalidFields(String),

    #[error("failed to register submit listener: {0}")]
    Listener(String),
}

impl From<AttachError> for JsValue {
    fn from(err: AttachError) -> Self {
        web_sys::console::error_1(&JsValue::from_str(&format!("formguard: {err}")));
        JsValue::from_str(&err.to_string())
    }
}

/// Readable text for an exception thrown by a DOM call
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
