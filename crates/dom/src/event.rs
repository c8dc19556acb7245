//! Translation between `KeyboardEvent` and the editing core.

use input_core::{Key, KeyDown, KeyOutcome};
use web_sys::{Event, KeyboardEvent};

/// Build a [`KeyDown`] from a DOM `keydown` event.
pub fn key_down_from_dom(event: &KeyboardEvent) -> KeyDown {
    key_down_from_parts(
        &event.key(),
        event.alt_key(),
        event.shift_key(),
        event.ctrl_key(),
        event.meta_key(),
    )
}

/// Same as [`key_down_from_dom`], from the event's individual fields.
pub fn key_down_from_parts(key: &str, alt: bool, shift: bool, ctrl: bool, meta: bool) -> KeyDown {
    KeyDown::new(Key::from_dom_key(key))
        .with_alt(alt)
        .with_shift(shift)
        .with_ctrl(ctrl)
        .with_meta(meta)
}

/// Hand the outcome back to the browser: a handled key suppresses the default action.
pub fn apply_outcome(event: &Event, outcome: KeyOutcome) {
    if outcome.is_handled() {
        event.prevent_default();
    }
}
