//! Auto-dismissal of server-rendered flash alerts.

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::bootstrap;
use crate::consts::ALERT_DISMISS_MS;
use crate::dom;

/// Schedule every `.alert` present right now to close after
/// [`ALERT_DISMISS_MS`]. Alerts inserted later (e.g. toasts) manage their
/// own lifetime.
pub fn auto_dismiss(doc: &Document) {
    for alert in dom::select_all(doc, ".alert") {
        spawn_local(async move {
            sleep(Duration::from_millis(ALERT_DISMISS_MS)).await;
            bootstrap::Alert::new(&alert).close();
        });
    }
}
