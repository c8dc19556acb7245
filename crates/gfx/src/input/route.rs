use egui::{Context, Event, EventFilter, Id, InputState, Key as EguiKey};
use input_core::{InputId, InputValueStore, Key, KeyDown, KeyOutcome, TabInsertion};

/// Map an egui widget id onto the store's [`InputId`].
#[inline]
pub fn to_input_id(id: Id) -> InputId {
    InputId::from_raw(id.value())
}

/// Convert a pressed `Event::Key` into a core [`KeyDown`].
///
/// Releases and non-key events yield `None`.
pub fn key_down_from_egui(event: &Event) -> Option<KeyDown> {
    let Event::Key {
        key,
        pressed: true,
        modifiers,
        ..
    } = event
    else {
        return None;
    };

    let key = match key {
        EguiKey::Tab => Key::Tab,
        other => Key::Named(other.name().to_string()),
    };
    Some(
        KeyDown::new(key)
            .with_alt(modifiers.alt)
            .with_shift(modifiers.shift)
            .with_ctrl(modifiers.ctrl)
            .with_meta(modifiers.mac_cmd),
    )
}

/// Keep egui focus on a text control and stop Tab from moving it elsewhere.
///
/// egui handles focus navigation when the frame begins, so the lock has to be
/// in place before the Tab press arrives; [`route_tab_keys`] then does the edit.
pub fn lock_tab_focus(ctx: &Context, focus_id: Id) {
    ctx.memory_mut(|mem| {
        mem.request_focus(focus_id);
        mem.set_focus_lock_filter(
            focus_id,
            EventFilter {
                tab: true,
                horizontal_arrows: false,
                vertical_arrows: false,
                escape: false,
            },
        );
    });
}

/// Run this frame's key presses for `id` through `handler`.
///
/// Events the handler claims are consumed so no later widget sees them.
/// Returns `Handled` if at least one press was claimed.
pub fn route_tab_keys(
    input: &mut InputState,
    store: &mut InputValueStore,
    id: InputId,
    handler: &TabInsertion,
) -> KeyOutcome {
    let mut outcome = KeyOutcome::NotHandled;
    input.events.retain(|event| {
        let Some(key_down) = key_down_from_egui(event) else {
            return true;
        };
        match store.handle_key_down(id, handler, &key_down) {
            KeyOutcome::Handled => {
                outcome = KeyOutcome::Handled;
                false
            }
            KeyOutcome::NotHandled => true,
        }
    });

    if outcome.is_handled() {
        log::trace!(target: "gfx.input", "tab routed to {:?}", id);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, Pos2, RawInput, Rect, Sense, Vec2};
    use input_core::SelectionRange;

    fn raw_input(events: Vec<Event>) -> RawInput {
        RawInput {
            events,
            screen_rect: Some(Rect::from_min_size(
                Pos2::new(0.0, 0.0),
                Vec2::new(800.0, 600.0),
            )),
            ..Default::default()
        }
    }

    fn key_press(key: EguiKey, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    /// Route one frame and report the outcome plus the events left behind.
    fn run_frame(
        ctx: &Context,
        events: Vec<Event>,
        store: &mut InputValueStore,
        id: InputId,
    ) -> (KeyOutcome, Vec<Event>) {
        let mut result = (KeyOutcome::NotHandled, Vec::new());
        let _ = ctx.run(raw_input(events), |ctx| {
            result = ctx.input_mut(|i| {
                let outcome = route_tab_keys(i, store, id, &TabInsertion::new());
                (outcome, i.events.clone())
            });
        });
        result
    }

    #[test]
    fn plain_tab_is_inserted_and_consumed() {
        let ctx = Context::default();
        let id = to_input_id(Id::new("code"));
        let mut store = InputValueStore::new();
        store.set(id, "ab".to_string());
        store.set_selection(id, 1, 1);

        let (outcome, left) = run_frame(
            &ctx,
            vec![key_press(EguiKey::Tab, Modifiers::NONE)],
            &mut store,
            id,
        );

        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(store.get(id), Some("a\tb"));
        assert_eq!(store.caret(id), Some(2));
        assert!(left.iter().all(|e| key_down_from_egui(e).is_none()));
    }

    #[test]
    fn alt_tab_stays_in_the_queue() {
        let ctx = Context::default();
        let id = to_input_id(Id::new("code"));
        let mut store = InputValueStore::new();
        store.set(id, "ab".to_string());

        let (outcome, left) = run_frame(
            &ctx,
            vec![key_press(EguiKey::Tab, Modifiers::ALT)],
            &mut store,
            id,
        );

        assert_eq!(outcome, KeyOutcome::NotHandled);
        assert_eq!(store.get(id), Some("ab"));
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn other_keys_pass_through_while_tabs_are_taken() {
        let ctx = Context::default();
        let id = to_input_id(Id::new("code"));
        let mut store = InputValueStore::new();
        store.set(id, String::new());

        let (outcome, left) = run_frame(
            &ctx,
            vec![
                key_press(EguiKey::Tab, Modifiers::NONE),
                key_press(EguiKey::Enter, Modifiers::NONE),
                key_press(EguiKey::Tab, Modifiers::NONE),
            ],
            &mut store,
            id,
        );

        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(store.get(id), Some("\t\t"));
        assert_eq!(
            store.get_state(id).map(|(_, caret, sel)| (caret, sel)),
            Some((2, None::<SelectionRange>))
        );
        assert_eq!(left.len(), 1);
        assert_eq!(
            key_down_from_egui(&left[0]).map(|k| k.key),
            Some(Key::Named("Enter".into()))
        );
    }

    #[test]
    fn released_keys_are_ignored() {
        let ev = Event::Key {
            key: EguiKey::Tab,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(key_down_from_egui(&ev), None);
    }

    /// Lay out two focusable widgets, `first` above `second`, in tab order.
    fn focusable_pair(ctx: &Context, first: Id, second: Id) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let top = Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::new(200.0, 20.0));
            let bottom = Rect::from_min_size(Pos2::new(10.0, 40.0), Vec2::new(200.0, 20.0));
            let _ = ui.interact(top, first, Sense::click());
            let _ = ui.interact(bottom, second, Sense::click());
        });
    }

    #[test]
    fn tab_moves_focus_without_the_lock() {
        let ctx = Context::default();
        let (code, next) = (Id::new("code"), Id::new("next"));

        let _ = ctx.run(raw_input(Vec::new()), |ctx| {
            focusable_pair(ctx, code, next);
            ctx.memory_mut(|mem| mem.request_focus(code));
        });
        assert!(ctx.memory(|mem| mem.has_focus(code)));

        let _ = ctx.run(
            raw_input(vec![key_press(EguiKey::Tab, Modifiers::NONE)]),
            |ctx| focusable_pair(ctx, code, next),
        );
        assert!(ctx.memory(|mem| mem.has_focus(next)));
    }

    #[test]
    fn focus_lock_keeps_tab_on_the_control() {
        let ctx = Context::default();
        let (code, next) = (Id::new("code"), Id::new("next"));
        let id = to_input_id(code);
        let mut store = InputValueStore::new();
        store.set(id, "fn".to_string());

        let _ = ctx.run(raw_input(Vec::new()), |ctx| {
            focusable_pair(ctx, code, next);
            lock_tab_focus(ctx, code);
        });
        assert!(ctx.memory(|mem| mem.has_focus(code)));

        let mut outcome = KeyOutcome::NotHandled;
        let _ = ctx.run(
            raw_input(vec![key_press(EguiKey::Tab, Modifiers::NONE)]),
            |ctx| {
                focusable_pair(ctx, code, next);
                outcome = ctx.input_mut(|i| route_tab_keys(i, &mut store, id, &TabInsertion::new()));
            },
        );

        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(store.get(id), Some("fn\t"));
        assert!(ctx.memory(|mem| mem.has_focus(code)));
        assert!(!ctx.memory(|mem| mem.has_focus(next)));
    }
}
