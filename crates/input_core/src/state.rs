//! Per-control state held by the [`InputValueStore`](crate::InputValueStore).

/// Internal state for a single text control.
#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    /// The current text value.
    pub value: String,

    /// Monotonic revision counter, incremented on any text change.
    pub value_rev: u64,

    /// Caret position as a byte index into `value` (always on a UTF-8 char boundary).
    pub caret: usize,

    /// Selection anchor as a byte index into `value`.
    ///
    /// When `Some(anchor)`, the selection range is `min(anchor, caret)..max(anchor, caret)`.
    pub selection_anchor: Option<usize>,
}

impl InputState {
    pub fn with_value(value: String) -> Self {
        let caret = value.len();
        Self {
            value,
            caret,
            ..Self::default()
        }
    }
}
