//! Bindings to the page's Bootstrap bundle.
//!
//! The server-rendered pages ship Bootstrap's JS, so alert dismissal goes
//! through the real widget (which runs the fade transition and fires
//! `closed.bs.alert`) rather than removing nodes behind its back. Closing
//! an element that is already gone is a no-op inside the widget.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Alert` — the dismissal controller for `.alert` elements.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &web_sys::Element) -> Alert;

    /// Close the alert, removing it from the DOM after the fade transition.
    #[wasm_bindgen(method)]
    pub fn close(this: &Alert);
}
