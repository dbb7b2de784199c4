//! Entrance animation for dashboard and list cards.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::consts::CARD_STAGGER_SECS;
use crate::dom;

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

/// Animation delay for the card at `index` (0-indexed), e.g. `"0.3s"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * CARD_STAGGER_SECS)
}

/// Add the `fade-in` class and a staggered `animation-delay` to every
/// `.card` present at page-ready.
pub fn animate_entrances(doc: &Document) {
    for (i, card) in dom::select_all(doc, ".card").into_iter().enumerate() {
        let _ = card.class_list().add_1("fade-in");
        if let Some(el) = card.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("animation-delay", &stagger_delay(i));
        }
    }
}
