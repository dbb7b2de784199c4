//! One-shot enhancement pass over the server-rendered page.
//!
//! Each behavior is independent and operates only on elements present at
//! page-ready; none observes later DOM mutations. The pass runs exactly
//! once per page load.

pub mod alerts;
pub mod cards;
pub mod confirm;
pub mod forms;
pub mod preview;
pub mod stats;
pub mod tables;

use web_sys::Document;

use crate::dom;

/// Run [`apply`] at page-ready: immediately if the document has already
/// finished parsing, otherwise on `DOMContentLoaded`.
pub fn install() {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        dom::listen(&doc, "DOMContentLoaded", |_| {
            if let Some(doc) = dom::document() {
                apply(&doc);
            }
        });
    } else {
        apply(&doc);
    }
}

/// Wire every enhancement onto `doc`.
pub fn apply(doc: &Document) {
    alerts::auto_dismiss(doc);
    cards::animate_entrances(doc);
    preview::attach(doc);
    confirm::guard_deletes(doc);
    forms::capture_labels(doc);
    forms::busy_on_submit(doc);
    tables::mark_sortable(doc);
    stats::animate(doc);
    log::debug!("page enhancements applied");
}
