//! Tab insertion for code textareas.
//!
//! A plain Tab press inserts a literal tab at the caret (replacing any
//! selection) instead of moving focus. Alt+Tab, and every other key, is left
//! to the host.

use crate::key::{KeyDown, KeyOutcome};
use crate::selection::SelectionRange;
use crate::traits::EditableText;

/// The string a Tab press inserts by default.
pub const TAB: &str = "\t";

/// A buffer edit: the new contents plus the collapsed caret position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub value: String,
    pub caret: usize,
}

impl TextEdit {
    #[inline]
    pub fn selection(&self) -> SelectionRange {
        SelectionRange::caret(self.caret)
    }
}

/// Replace `selection` in `value` with `insert`, leaving the caret after it.
///
/// The selection is clamped to `value` first, so arbitrary offsets never panic.
///
/// ```
/// use input_core::{SelectionRange, replace_selection};
///
/// let edit = replace_selection("ab", SelectionRange::caret(1), "\t");
/// assert_eq!(edit.value, "a\tb");
/// assert_eq!(edit.caret, 2);
/// ```
pub fn replace_selection(value: &str, selection: SelectionRange, insert: &str) -> TextEdit {
    let sel = selection.clamped_to(value);
    let before = sel.before(value);
    let after = sel.after(value);

    let mut out = String::with_capacity(before.len() + insert.len() + after.len());
    out.push_str(before);
    out.push_str(insert);
    out.push_str(after);

    TextEdit {
        value: out,
        caret: before.len() + insert.len(),
    }
}

/// The Tab key handler.
///
/// Holds only its configuration; the text control is passed to every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabInsertion {
    insert: String,
}

impl Default for TabInsertion {
    fn default() -> Self {
        Self {
            insert: TAB.to_string(),
        }
    }
}

impl TabInsertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `insert` instead of a tab character (e.g. four spaces).
    pub fn with_insert(insert: impl Into<String>) -> Self {
        Self {
            insert: insert.into(),
        }
    }

    pub fn insert(&self) -> &str {
        &self.insert
    }

    /// Whether this handler claims `event`.
    #[inline]
    pub fn accepts(&self, event: &KeyDown) -> bool {
        event.key.is_tab() && !event.alt
    }

    /// Pure form: compute the edit for `event`, or `None` if the key is not ours.
    pub fn apply(
        &self,
        value: &str,
        selection: SelectionRange,
        event: &KeyDown,
    ) -> Option<TextEdit> {
        if !self.accepts(event) {
            return None;
        }
        Some(replace_selection(value, selection, &self.insert))
    }

    /// Run the handler against a host-owned text control.
    pub fn handle_key_down<T: EditableText + ?Sized>(
        &self,
        target: &mut T,
        event: &KeyDown,
    ) -> KeyOutcome {
        if !self.accepts(event) {
            return KeyOutcome::NotHandled;
        }

        let value = target.value();
        let selection = target.selection();
        let edit = replace_selection(&value, selection, &self.insert);
        log::trace!(
            target: "input.tab",
            "insert {:?} at {}..{} -> caret {}",
            self.insert,
            selection.start,
            selection.end,
            edit.caret
        );
        target.replace_value_and_caret(edit.value, edit.caret);
        KeyOutcome::Handled
    }
}

/// Pure tab insertion with the default `"\t"` string.
///
/// Returns the edited buffer and caret together with the outcome; for
/// [`KeyOutcome::NotHandled`] the buffer and selection come back unchanged.
///
/// ```
/// use input_core::{Key, KeyDown, KeyOutcome, SelectionRange, insert_tab};
///
/// let (edit, outcome) = insert_tab("hello", SelectionRange::caret(5), &KeyDown::new(Key::Tab));
/// assert_eq!(edit.value, "hello\t");
/// assert_eq!(edit.caret, 6);
/// assert_eq!(outcome, KeyOutcome::Handled);
/// ```
pub fn insert_tab(
    value: &str,
    selection: SelectionRange,
    event: &KeyDown,
) -> (TextEditResult, KeyOutcome) {
    match TabInsertion::default().apply(value, selection, event) {
        Some(edit) => (
            TextEditResult {
                selection: edit.selection(),
                caret: edit.caret,
                value: edit.value,
            },
            KeyOutcome::Handled,
        ),
        None => (
            TextEditResult {
                value: value.to_string(),
                selection,
                caret: selection.end,
            },
            KeyOutcome::NotHandled,
        ),
    }
}

/// Buffer and selection after [`insert_tab`], whether or not it edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEditResult {
    pub value: String,
    pub selection: SelectionRange,
    /// End of `selection`; the caret position for a collapsed selection.
    pub caret: usize,
}
