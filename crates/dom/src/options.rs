//! Binding configuration.

use input_core::{TAB, TabInsertion};

/// Id of the code textarea on the paste page.
pub const DEFAULT_ELEMENT_ID: &str = "code";

/// Where and how to bind the tab-insertion handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindOptions {
    /// `id` attribute of the target `<textarea>` (or `<input>`).
    pub element_id: String,
    /// Give the element input focus once bound.
    pub autofocus: bool,
    /// Text inserted for each Tab press.
    pub insert: String,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            autofocus: true,
            insert: TAB.to_string(),
        }
    }
}

impl BindOptions {
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = id.into();
        self
    }

    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    pub fn with_insert(mut self, insert: impl Into<String>) -> Self {
        self.insert = insert.into();
        self
    }

    pub(crate) fn handler(&self) -> TabInsertion {
        TabInsertion::with_insert(self.insert.clone())
    }
}
