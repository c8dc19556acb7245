//! End-to-end Tab behavior through the public API.

use input_core::{
    EditableText, Key, KeyDown, KeyOutcome, SelectionRange, TabInsertion, TextBuffer, insert_tab,
};

fn press(buf: &mut TextBuffer, event: KeyDown) -> KeyOutcome {
    TabInsertion::new().handle_key_down(buf, &event)
}

#[test]
fn tab_at_end_of_word() {
    let mut buf = TextBuffer::new("hello").with_selection(5, 5);
    assert_eq!(press(&mut buf, KeyDown::new(Key::Tab)), KeyOutcome::Handled);
    assert_eq!(buf.value(), "hello\t");
    assert_eq!(buf.selection(), SelectionRange::new(6, 6));
}

#[test]
fn tab_between_characters() {
    let mut buf = TextBuffer::new("ab").with_selection(1, 1);
    assert_eq!(press(&mut buf, KeyDown::new(Key::Tab)), KeyOutcome::Handled);
    assert_eq!(buf.value(), "a\tb");
    assert_eq!(buf.selection(), SelectionRange::new(2, 2));
}

#[test]
fn tab_over_full_selection() {
    let mut buf = TextBuffer::new("ab").with_selection(0, 2);
    assert_eq!(press(&mut buf, KeyDown::new(Key::Tab)), KeyOutcome::Handled);
    assert_eq!(buf.value(), "\t");
    assert_eq!(buf.selection(), SelectionRange::new(1, 1));
}

#[test]
fn letter_key_proceeds_with_default() {
    let mut buf = TextBuffer::new("ab").with_selection(1, 1);
    let outcome = press(&mut buf, KeyDown::new(Key::from_dom_key("a")));
    assert!(outcome.should_continue_default());
    assert_eq!(buf.value(), "ab");
    assert_eq!(buf.selection(), SelectionRange::new(1, 1));
}

#[test]
fn alt_tab_proceeds_with_default() {
    let mut buf = TextBuffer::new("ab").with_selection(1, 1);
    let outcome = press(&mut buf, KeyDown::new(Key::Tab).with_alt(true));
    assert!(outcome.should_continue_default());
    assert_eq!(buf.value(), "ab");
}

#[test]
fn two_tabs_on_empty_buffer() {
    let mut buf = TextBuffer::new("").with_selection(0, 0);
    let _ = press(&mut buf, KeyDown::new(Key::Tab));
    let _ = press(&mut buf, KeyDown::new(Key::Tab));
    assert_eq!(buf.value(), "\t\t");
    assert_eq!(buf.selection(), SelectionRange::caret(2));
}

#[test]
fn caret_tab_grows_buffer_by_one_at_every_position() {
    let value = "let x = 1;";
    for pos in 0..=value.len() {
        let (res, outcome) = insert_tab(value, SelectionRange::caret(pos), &KeyDown::new(Key::Tab));
        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(res.value.len(), value.len() + 1);
        assert_eq!(res.selection, SelectionRange::caret(pos + 1));
        assert_eq!(&res.value[pos..pos + 1], "\t");
    }
}
