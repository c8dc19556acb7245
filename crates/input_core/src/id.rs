//! Opaque identifier for text controls held in an [`InputValueStore`](crate::InputValueStore).

/// Lightweight, copyable handle for one text control.
///
/// The raw value has no meaning inside this crate. Host adapters map their
/// own identifiers (egui ids, DOM node ids) onto it with [`InputId::from_raw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}
