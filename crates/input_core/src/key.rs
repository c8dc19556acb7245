//! Host-neutral key-down notifications and handler outcomes.

use std::fmt;

/// Logical key identity, as reported by the host before any default action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Tab,
    /// A key that produces a single character (`"a"`, `" "`, `"€"`).
    Character(char),
    /// Any other named, non-printable key (`"Enter"`, `"ArrowLeft"`, ...).
    Named(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    ///
    /// ```
    /// use input_core::Key;
    ///
    /// assert_eq!(Key::from_dom_key("Tab"), Key::Tab);
    /// assert_eq!(Key::from_dom_key("a"), Key::Character('a'));
    /// assert_eq!(Key::from_dom_key("Enter"), Key::Named("Enter".into()));
    /// ```
    pub fn from_dom_key(dom_key: &str) -> Self {
        if dom_key == "Tab" {
            return Key::Tab;
        }

        let mut chars = dom_key.chars();
        if let Some(first) = chars.next()
            && chars.next().is_none()
        {
            return Key::Character(first);
        }

        if dom_key.is_empty() {
            return Key::Named("Unidentified".to_string());
        }
        Key::Named(dom_key.to_string())
    }

    #[inline]
    pub fn is_tab(&self) -> bool {
        matches!(self, Key::Tab)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Tab => f.write_str("Tab"),
            Key::Character(c) => write!(f, "{c}"),
            Key::Named(name) => f.write_str(name),
        }
    }
}

/// A key-down notification delivered to a text control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyDown {
    pub key: Key,
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyDown {
    /// A key press with no modifiers held.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            alt: false,
            shift: false,
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

/// What a key handler did with a notification.
///
/// Host adapters translate this into their native mechanism; in the DOM,
/// `Handled` becomes `preventDefault()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum KeyOutcome {
    /// The handler consumed the key; the host must suppress its default action.
    Handled,
    /// The handler ignored the key; the host proceeds as usual.
    NotHandled,
}

impl KeyOutcome {
    /// The classic event-callback return value: `true` lets the default run.
    #[inline]
    pub fn should_continue_default(self) -> bool {
        matches!(self, KeyOutcome::NotHandled)
    }

    #[inline]
    pub fn is_handled(self) -> bool {
        matches!(self, KeyOutcome::Handled)
    }
}
