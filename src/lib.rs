//! Browser entry point for the paste page's code textarea.
//!
//! Built as a `cdylib` for `wasm32-unknown-unknown`; the start function
//! installs console logging and binds the tab-insertion handler to
//! `#code` once the page has loaded. See `web/index.html`.

pub use dom::{BindError, BindOptions};
pub use input_core::{KeyOutcome, TabInsertion};

/// Console log level for the browser build.
pub fn log_level() -> log::Level {
    if cfg!(feature = "trace-log") {
        log::Level::Trace
    } else {
        log::Level::Info
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    // Fails only if the embedding page already installed a logger.
    let _ = console_log::init_with_level(log_level());

    dom::install_on_load(BindOptions::default()).map_err(|err| {
        log::error!(target: "yep", "cannot bind tab insertion: {err}");
        err.into()
    })
}
