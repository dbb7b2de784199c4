//! Submit busy-state with a timed fallback reset.

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlButtonElement};

use crate::consts::SUBMIT_RESET_MS;
use crate::dom;

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Dataset key holding a submit button's pre-busy label.
const ORIGINAL_TEXT_KEY: &str = "originalText";

/// Busy label shown while a submission is in flight.
#[must_use]
pub fn busy_label() -> &'static str {
    "<span class=\"spinner-border spinner-border-sm me-2\"></span>Processing..."
}

/// Label to restore once the busy state ends.
#[must_use]
pub fn restored_label(stored: Option<String>) -> String {
    stored.unwrap_or_else(|| "Submit".to_owned())
}

/// Record every submit button's current label so the fallback reset can
/// restore it later.
pub fn capture_labels(doc: &Document) {
    for button in dom::select_all(doc, "button[type=\"submit\"]") {
        if let Some(btn) = button.dyn_ref::<HtmlButtonElement>() {
            let _ = btn.dataset().set(ORIGINAL_TEXT_KEY, &btn.inner_html());
        }
    }
}

/// Disable the form's submit button on submit, then re-enable it and
/// restore its label after [`SUBMIT_RESET_MS`].
///
/// The reset fires unconditionally — nothing at this layer observes the
/// real submission outcome. Forms without a submit button are untouched.
pub fn busy_on_submit(doc: &Document) {
    for form in dom::select_all(doc, "form") {
        let form_el = form.clone();
        dom::listen(&form, "submit", move |_| {
            let Some(button) = form_el
                .query_selector("button[type=\"submit\"]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
            else {
                return;
            };
            button.set_disabled(true);
            button.set_inner_html(busy_label());

            spawn_local(async move {
                sleep(Duration::from_millis(SUBMIT_RESET_MS)).await;
                button.set_disabled(false);
                button.set_inner_html(&restored_label(button.dataset().get(ORIGINAL_TEXT_KEY)));
            });
        });
    }
}
