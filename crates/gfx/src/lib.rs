//! egui host for the tab-insertion handler.
//!
//! Text control state lives in an [`input_core::InputValueStore`]; each
//! frame the host locks Tab focus on the active control and routes the
//! frame's key presses through the handler before any widget reads them.

pub mod input;

pub use input::{key_down_from_egui, lock_tab_focus, route_tab_keys, to_input_id};
