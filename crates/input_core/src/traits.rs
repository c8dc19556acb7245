//! The text-control seam key handlers operate on.
//!
//! Handlers never reach for a global element: the host passes the control
//! in. The DOM adapter implements this for `<textarea>`, the store
//! implements it for one of its entries, and tests use a plain struct.

use crate::selection::SelectionRange;

/// A text buffer plus its caret/selection, owned by some host control.
///
/// Offsets are UTF-8 byte offsets. Implementations backed by hosts with other
/// offset units convert in these methods.
pub trait EditableText {
    /// The current buffer contents.
    fn value(&self) -> String;

    /// The current selection; collapsed when there is just a caret.
    fn selection(&self) -> SelectionRange;

    /// Replace the buffer and collapse the selection to `caret`.
    fn replace_value_and_caret(&mut self, value: String, caret: usize);
}

/// In-memory control: a `String` with a selection.
///
/// Useful on its own for hosts that keep a single buffer, and as a test double.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    pub value: String,
    pub selection: SelectionRange,
}

impl TextBuffer {
    /// A buffer with the caret at the end of `value`.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let end = value.len();
        Self {
            value,
            selection: SelectionRange::caret(end),
        }
    }

    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.selection = SelectionRange::new(start, end);
        self
    }
}

impl EditableText for TextBuffer {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn replace_value_and_caret(&mut self, value: String, caret: usize) {
        self.value = value;
        self.selection = SelectionRange::caret(caret);
    }
}
