//! # input_core
//!
//! UI-agnostic editing core for code textareas.
//!
//! The one behavior this crate implements is Tab insertion: a plain Tab
//! press inserts a literal tab at the caret (replacing any selection) and
//! reports [`KeyOutcome::Handled`], so the host suppresses its default
//! focus navigation. Everything else is [`KeyOutcome::NotHandled`].
//!
//! - [`TabInsertion`]: the handler; operates on any [`EditableText`]
//! - [`insert_tab`]: the same logic as a pure function over `(value, selection, key)`
//! - [`InputValueStore`]: keyed storage for hosts that own their text controls
//! - [`KeyDown`] / [`KeyOutcome`]: host-neutral event in, outcome out
//!
//! Offsets are UTF-8 byte offsets on character boundaries. Hosts with
//! UTF-16 selections (the DOM) convert with [`utf16_to_byte_offset`] and
//! [`byte_to_utf16_offset`].

mod id;
mod key;
mod selection;
mod state;
mod store;
mod tab;
mod text;
mod traits;

pub use id::InputId;
pub use key::{Key, KeyDown, KeyOutcome};
pub use selection::SelectionRange;
pub use store::{InputEntry, InputValueStore};
pub use tab::{TAB, TabInsertion, TextEdit, TextEditResult, insert_tab, replace_selection};
pub use text::{byte_to_utf16_offset, clamp_to_char_boundary, utf16_to_byte_offset};
pub use traits::{EditableText, TextBuffer};
