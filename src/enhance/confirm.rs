//! Blocking confirmation for delete actions.

use web_sys::Document;

use crate::dom;

/// Message shown before any delete action proceeds.
const CONFIRM_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Require confirmation on every `[data-action="delete"]` control.
/// Declining cancels the default action (navigation or form submission);
/// accepting lets it proceed unmodified.
pub fn guard_deletes(doc: &Document) {
    for control in dom::select_all(doc, "[data-action=\"delete\"]") {
        dom::listen(&control, "click", |event| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(CONFIRM_MESSAGE).ok())
                .unwrap_or(false);
            if !confirmed {
                event.prevent_default();
            }
        });
    }
}
