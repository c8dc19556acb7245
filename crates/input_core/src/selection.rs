//! Text selection representation.

use crate::text::clamp_to_char_boundary;

/// A selection (or plain caret) as a byte range into a text buffer.
///
/// The range is always normalized such that `start <= end`. A collapsed
/// range (`start == end`) is a caret with nothing selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range, normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection: just a caret at `at`.
    #[inline]
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends to character boundaries inside `value`.
    ///
    /// After clamping, [`before`](Self::before) and [`after`](Self::after)
    /// never panic.
    pub fn clamped_to(self, value: &str) -> Self {
        Self::new(
            clamp_to_char_boundary(value, self.start),
            clamp_to_char_boundary(value, self.end),
        )
    }

    /// The text preceding the selection.
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of bounds or not on a character boundary.
    #[inline]
    pub fn before<'a>(&self, value: &'a str) -> &'a str {
        &value[..self.start]
    }

    /// The text following the selection.
    ///
    /// # Panics
    ///
    /// Panics if `end` is out of bounds or not on a character boundary.
    #[inline]
    pub fn after<'a>(&self, value: &'a str) -> &'a str {
        &value[self.end..]
    }
}
