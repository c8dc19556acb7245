//! Errors raised while binding the handler to the page.

use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindError {
    /// Not running in a browser window (e.g. inside a worker).
    NoWindow,
    NoDocument,
    ElementNotFound {
        id: String,
    },
    /// The element exists but holds no editable text with a caret.
    NotATextControl {
        id: String,
        tag: String,
    },
    /// A DOM call threw.
    Js(String),
}

impl BindError {
    pub(crate) fn js(context: &str, value: JsValue) -> Self {
        BindError::Js(format!("{context}: {value:?}"))
    }
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::NoWindow => f.write_str("no global window"),
            BindError::NoDocument => f.write_str("window has no document"),
            BindError::ElementNotFound { id } => write!(f, "no element with id {id:?}"),
            BindError::NotATextControl { id, tag } => {
                write!(f, "element {id:?} is a <{tag}>, not a textarea or text input")
            }
            BindError::Js(msg) => write!(f, "DOM call failed: {msg}"),
        }
    }
}

impl std::error::Error for BindError {}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
