//! Central store for text control values, carets, and selections.
//!
//! Hosts that draw their own text controls (rather than delegating to a
//! native widget) keep the editable state here and route key-down
//! notifications through [`InputValueStore::handle_key_down`].

use crate::id::InputId;
use crate::key::{KeyDown, KeyOutcome};
use crate::selection::SelectionRange;
use crate::state::InputState;
use crate::tab::TabInsertion;
use crate::text::clamp_to_char_boundary;
use crate::traits::EditableText;
use std::collections::HashMap;

/// Central store for text control state.
///
/// # Example
///
/// ```
/// use input_core::{InputId, InputValueStore, Key, KeyDown, KeyOutcome, TabInsertion};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.set(id, "fn main() {".to_string());
/// let outcome = store.handle_key_down(id, &TabInsertion::new(), &KeyDown::new(Key::Tab));
///
/// assert_eq!(outcome, KeyOutcome::Handled);
/// assert_eq!(store.get(id), Some("fn main() {\t"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this control.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns `(value, caret, selection)` if the control exists.
    pub fn get_state(&self, id: InputId) -> Option<(&str, usize, Option<SelectionRange>)> {
        self.values.get(&id).map(|s| {
            let sel = selection_range(&s.value, s.selection_anchor, s.caret);
            (s.value.as_str(), s.caret, sel)
        })
    }

    /// Monotonic revision counter for the control's value.
    pub fn value_revision(&self, id: InputId) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    pub fn caret(&self, id: InputId) -> Option<usize> {
        self.values.get(&id).map(|s| s.caret)
    }

    /// Set/overwrite the value for this control.
    ///
    /// This moves the caret to the end and clears any selection.
    pub fn set(&mut self, id: InputId, value: String) {
        let value_rev = self
            .values
            .get(&id)
            .map(|s| s.value_rev.wrapping_add(1))
            .unwrap_or(0);
        self.values.insert(
            id,
            InputState {
                value_rev,
                ..InputState::with_value(value)
            },
        );
    }

    /// Select `anchor..caret` (in either direction). Equal offsets place a caret.
    ///
    /// Offsets are clamped to character boundaries.
    pub fn set_selection(&mut self, id: InputId, anchor: usize, caret: usize) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        st.caret = clamp_to_char_boundary(&st.value, caret);
        st.selection_anchor = Some(clamp_to_char_boundary(&st.value, anchor));
        normalize_selection_anchor(st);
    }

    /// Borrow one control as an [`EditableText`].
    pub fn entry(&mut self, id: InputId) -> Option<InputEntry<'_>> {
        self.values.get_mut(&id).map(|state| {
            clamp_state(state);
            InputEntry { state }
        })
    }

    /// Route a key-down notification for `id` through `handler`.
    ///
    /// Unknown controls are not handled, so the host keeps its default.
    pub fn handle_key_down(
        &mut self,
        id: InputId,
        handler: &TabInsertion,
        event: &KeyDown,
    ) -> KeyOutcome {
        match self.entry(id) {
            Some(mut entry) => handler.handle_key_down(&mut entry, event),
            None => {
                log::debug!(target: "input.store", "key {} for unknown control {:?}", event.key, id);
                KeyOutcome::NotHandled
            }
        }
    }
}

/// A mutable view of one control in an [`InputValueStore`].
#[derive(Debug)]
pub struct InputEntry<'a> {
    state: &'a mut InputState,
}

impl EditableText for InputEntry<'_> {
    fn value(&self) -> String {
        self.state.value.clone()
    }

    fn selection(&self) -> SelectionRange {
        selection_range(&self.state.value, self.state.selection_anchor, self.state.caret)
            .unwrap_or(SelectionRange::caret(self.state.caret))
    }

    fn replace_value_and_caret(&mut self, value: String, caret: usize) {
        let st = &mut *self.state;
        st.value = value;
        st.caret = clamp_to_char_boundary(&st.value, caret);
        st.selection_anchor = None;
        st.value_rev = st.value_rev.wrapping_add(1);
    }
}

// --- Internal helper functions ---

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = anchor?;

    let a = clamp_to_char_boundary(value, anchor);
    let c = clamp_to_char_boundary(value, caret);
    if a == c {
        return None;
    }

    Some(SelectionRange::new(a, c))
}

fn normalize_selection_anchor(st: &mut InputState) {
    // If selection collapsed, clear anchor to avoid "sticky" selection.
    if st.selection_anchor == Some(st.caret) {
        st.selection_anchor = None;
    }
}

fn clamp_state(st: &mut InputState) {
    st.caret = clamp_to_char_boundary(&st.value, st.caret);
    if let Some(a) = st.selection_anchor {
        st.selection_anchor = Some(clamp_to_char_boundary(&st.value, a));
    }
}
