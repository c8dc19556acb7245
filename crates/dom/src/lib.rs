//! # dom
//!
//! Browser host for the tab-insertion handler.
//!
//! On page load the handler is attached to the code `<textarea>` (id
//! `"code"` by default) as its `keydown` listener and the element is
//! focused. Each key press is translated into an [`input_core::KeyDown`];
//! a [`input_core::KeyOutcome::Handled`] result becomes `preventDefault()`
//! so the browser does not move focus.

mod bind;
mod control;
mod error;
mod event;
mod options;

pub use bind::{TabBinding, bind_tab_handler, install_on_load};
pub use control::{TextControl, caret_to_utf16, input_type_has_caret, selection_from_utf16};
pub use error::BindError;
pub use event::{apply_outcome, key_down_from_dom, key_down_from_parts};
pub use options::{BindOptions, DEFAULT_ELEMENT_ID};
