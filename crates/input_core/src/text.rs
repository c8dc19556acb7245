//! UTF-8 / UTF-16 offset utilities for text controls.
//!
//! The editing core addresses text by UTF-8 byte offsets on character
//! boundaries. Hosts such as the DOM report selections in UTF-16 code units,
//! so adapters convert at their boundary with the helpers below.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0);
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Convert a UTF-16 code unit offset into a UTF-8 byte offset.
///
/// Offsets past the end map to `s.len()`. An offset that splits a surrogate
/// pair snaps back to the start of that character.
///
/// # Examples
///
/// ```
/// use input_core::utf16_to_byte_offset;
///
/// let s = "a€😀b"; // '€' = 1 unit / 3 bytes, '😀' = 2 units / 4 bytes
/// assert_eq!(utf16_to_byte_offset(s, 1), 1);
/// assert_eq!(utf16_to_byte_offset(s, 2), 4);
/// assert_eq!(utf16_to_byte_offset(s, 3), 4); // inside the surrogate pair
/// assert_eq!(utf16_to_byte_offset(s, 4), 8);
/// assert_eq!(utf16_to_byte_offset(s, 99), s.len());
/// ```
pub fn utf16_to_byte_offset(s: &str, utf16_offset: usize) -> usize {
    let mut units = 0usize;
    for (byte_idx, ch) in s.char_indices() {
        let next = units + ch.len_utf16();
        if next > utf16_offset {
            return byte_idx;
        }
        units = next;
    }
    s.len()
}

/// Convert a UTF-8 byte offset into a UTF-16 code unit offset.
///
/// The byte offset is first clamped to a character boundary.
///
/// # Examples
///
/// ```
/// use input_core::byte_to_utf16_offset;
///
/// let s = "a€😀b";
/// assert_eq!(byte_to_utf16_offset(s, 4), 2);
/// assert_eq!(byte_to_utf16_offset(s, 8), 4);
/// assert_eq!(byte_to_utf16_offset(s, 6), 2); // mid '😀' -> start of '😀'
/// ```
pub fn byte_to_utf16_offset(s: &str, byte_offset: usize) -> usize {
    let byte_offset = clamp_to_char_boundary(s, byte_offset);
    s[..byte_offset].chars().map(char::len_utf16).sum()
}
