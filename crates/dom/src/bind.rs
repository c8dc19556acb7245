//! Startup binding: find the code textarea, listen for `keydown`, focus it.

use crate::control::TextControl;
use crate::error::BindError;
use crate::event::{apply_outcome, key_down_from_dom};
use crate::options::BindOptions;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

/// A live `keydown` registration.
///
/// Dropping it removes the listener. Call [`TabBinding::forget`] to keep it
/// for the lifetime of the page.
pub struct TabBinding {
    control: TextControl,
    listener: Option<KeyListener>,
}

impl TabBinding {
    pub fn control(&self) -> &TextControl {
        &self.control
    }

    /// Leak the listener so it outlives this handle.
    pub fn forget(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.forget();
        }
    }
}

impl Drop for TabBinding {
    fn drop(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        if let Err(err) = self
            .control
            .html_element()
            .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            log::warn!(target: "dom.bind", "removeEventListener failed: {err:?}");
        }
    }
}

impl std::fmt::Debug for TabBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabBinding")
            .field("control", &self.control)
            .field("attached", &self.listener.is_some())
            .finish()
    }
}

/// Bind the tab-insertion handler to `#element_id` in `document`.
pub fn bind_tab_handler(document: &Document, options: &BindOptions) -> Result<TabBinding, BindError> {
    let id = &options.element_id;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::ElementNotFound { id: id.clone() })?;
    let control = TextControl::from_element(element).map_err(|element| {
        BindError::NotATextControl {
            id: id.clone(),
            tag: describe_tag(&element),
        }
    })?;

    let handler = options.handler();
    let mut target = control.clone();
    let listener = KeyListener::new(move |event: KeyboardEvent| {
        let outcome = handler.handle_key_down(&mut target, &key_down_from_dom(&event));
        apply_outcome(&event, outcome);
    });

    control
        .html_element()
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .map_err(|err| BindError::js("addEventListener", err))?;

    let binding = TabBinding {
        control,
        listener: Some(listener),
    };

    if options.autofocus {
        binding
            .control
            .html_element()
            .focus()
            .map_err(|err| BindError::js("focus", err))?;
    }

    log::info!(target: "dom.bind", "tab insertion bound to #{id}");
    Ok(binding)
}

/// Bind once the page has loaded (immediately if it already has).
///
/// Failures before the load event are returned; failures inside the load
/// callback can only be logged.
pub fn install_on_load(options: BindOptions) -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    if document_is_loaded(&document) {
        bind_tab_handler(&document, &options)?.forget();
        return Ok(());
    }

    let on_load = Closure::once_into_js(move || match bind_tab_handler(&document, &options) {
        Ok(binding) => binding.forget(),
        Err(err) => log::error!(target: "dom.bind", "binding on load failed: {err}"),
    });
    window
        .add_event_listener_with_callback("load", on_load.unchecked_ref())
        .map_err(|err| BindError::js("addEventListener", err))?;

    log::debug!(target: "dom.bind", "waiting for load event");
    Ok(())
}

fn document_is_loaded(document: &Document) -> bool {
    document.ready_state() == "complete"
}

fn describe_tag(element: &Element) -> String {
    match element.dyn_ref::<HtmlInputElement>() {
        Some(input) => format!("input type={:?}", input.type_()),
        None => element.tag_name().to_ascii_lowercase(),
    }
}
