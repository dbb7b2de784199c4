//! Shared DOM access helpers.
//!
//! Everything here degrades to a no-op outside a browser context: a missing
//! window, a failed query, or a non-element node simply yields nothing.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget};

/// The current document, if running in a browser context.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn select_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

/// Attach a persistent event listener to `target`.
///
/// The closure is leaked on success: enhancement listeners live for the
/// rest of the page's lifetime and are never detached.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}
