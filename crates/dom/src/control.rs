//! `<textarea>` / `<input>` as an [`EditableText`].
//!
//! The DOM reports `selectionStart` / `selectionEnd` in UTF-16 code units;
//! the editing core works in UTF-8 byte offsets. Conversion happens here and
//! nowhere else.

use input_core::{EditableText, SelectionRange, byte_to_utf16_offset, utf16_to_byte_offset};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// A DOM element that holds editable text.
#[derive(Clone, Debug)]
pub enum TextControl {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl TextControl {
    /// Downcast `element`; gives it back unchanged if it holds no editable text.
    ///
    /// Inputs are accepted only when their type exposes a caret, see
    /// [`input_type_has_caret`].
    pub fn from_element(element: Element) -> Result<Self, Element> {
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Ok(TextControl::TextArea(area)),
            Err(element) => element,
        };
        let input = element.dyn_into::<HtmlInputElement>()?;
        if input_type_has_caret(&input.type_()) {
            Ok(TextControl::Input(input))
        } else {
            Err(input.into())
        }
    }

    pub fn html_element(&self) -> &HtmlElement {
        match self {
            TextControl::TextArea(el) => el,
            TextControl::Input(el) => el,
        }
    }

    fn raw_value(&self) -> String {
        match self {
            TextControl::TextArea(el) => el.value(),
            TextControl::Input(el) => el.value(),
        }
    }

    fn set_raw_value(&self, value: &str) {
        match self {
            TextControl::TextArea(el) => el.set_value(value),
            TextControl::Input(el) => el.set_value(value),
        }
    }

    // Input types without a selection API (e.g. `number`) throw or report null.
    fn utf16_selection(&self) -> (Option<u32>, Option<u32>) {
        match self {
            TextControl::TextArea(el) => (
                el.selection_start().ok().flatten(),
                el.selection_end().ok().flatten(),
            ),
            TextControl::Input(el) => (
                el.selection_start().ok().flatten(),
                el.selection_end().ok().flatten(),
            ),
        }
    }

    fn set_utf16_selection(&self, start: u32, end: u32) -> Result<(), JsValue> {
        match self {
            TextControl::TextArea(el) => el.set_selection_range(start, end),
            TextControl::Input(el) => el.set_selection_range(start, end),
        }
    }
}

impl EditableText for TextControl {
    fn value(&self) -> String {
        self.raw_value()
    }

    fn selection(&self) -> SelectionRange {
        let value = self.raw_value();
        let (start, end) = self.utf16_selection();
        selection_from_utf16(&value, start, end)
    }

    fn replace_value_and_caret(&mut self, value: String, caret: usize) {
        let caret = caret_to_utf16(&value, caret);
        self.set_raw_value(&value);
        if let Err(err) = self.set_utf16_selection(caret, caret) {
            log::warn!(target: "dom.control", "cannot place caret at {caret}: {err:?}");
        }
    }
}

/// Whether an `<input type=...>` supports `selectionStart` / `setSelectionRange`.
///
/// `number`, `email`, `checkbox` and the like have no caret the handler could
/// insert at. An empty or unknown type renders as `text`.
pub fn input_type_has_caret(kind: &str) -> bool {
    match kind.to_ascii_lowercase().as_str() {
        "text" | "search" | "url" | "tel" | "password" => true,
        "button" | "checkbox" | "color" | "date" | "datetime-local" | "email" | "file"
        | "hidden" | "image" | "month" | "number" | "radio" | "range" | "reset" | "submit"
        | "time" | "week" => false,
        _ => true,
    }
}

/// Map a DOM selection (UTF-16 units, possibly missing) onto byte offsets.
///
/// A missing end falls back to the start; a missing start means the control
/// has no caret, which is treated as a caret at the end of the text.
pub fn selection_from_utf16(value: &str, start: Option<u32>, end: Option<u32>) -> SelectionRange {
    let Some(start) = start else {
        return SelectionRange::caret(value.len());
    };
    let end = end.unwrap_or(start);
    SelectionRange::new(
        utf16_to_byte_offset(value, start as usize),
        utf16_to_byte_offset(value, end as usize),
    )
}

/// Map a byte caret back onto the UTF-16 offset the DOM expects.
pub fn caret_to_utf16(value: &str, caret: usize) -> u32 {
    u32::try_from(byte_to_utf16_offset(value, caret)).unwrap_or(u32::MAX)
}
