//! Sortable-header affordance.
//!
//! Sorting itself happens server-side (or not yet at all); the handler
//! only reports the requested key, keeping the extension point visible in
//! the console.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

/// Give every `th[data-sort]` a pointer cursor and a click reporter.
pub fn mark_sortable(doc: &Document) {
    for header in dom::select_all(doc, "th[data-sort]") {
        let Ok(th) = header.dyn_into::<HtmlElement>() else {
            continue;
        };
        let _ = th.style().set_property("cursor", "pointer");
        let th_in_click = th.clone();
        dom::listen(&th, "click", move |_| {
            let key = th_in_click.dataset().get("sort").unwrap_or_default();
            log::info!("sort requested: {key}");
        });
    }
}
