//! Floating toast notifications.
//!
//! Toasts are built as dismissible Bootstrap alerts pinned to the top-right
//! corner of the viewport, so they pick up the same styling and close
//! behavior as the server-rendered flash messages.

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::bootstrap;
use crate::consts::TOAST_DISMISS_MS;
use crate::dom;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual severity of a toast, mapped onto Bootstrap's contextual alert
/// classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Parse a kind passed in from page scripts. Unknown values fall back
    /// to [`ToastKind::Info`]; `"error"` is accepted as an alias for
    /// danger.
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        match kind {
            "success" => Self::Success,
            "danger" | "error" => Self::Danger,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Bootstrap contextual suffix, e.g. `success` in `alert-success`.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Build one toast, attach it to `<body>`, and schedule its removal after
/// [`TOAST_DISMISS_MS`].
pub fn show(message: &str, kind: ToastKind) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(toast) = doc.create_element("div") else {
        return;
    };

    let class = format!(
        "alert alert-{} alert-dismissible fade show position-fixed",
        kind.suffix()
    );
    let _ = toast.set_attribute("class", &class);
    let _ = toast.set_attribute(
        "style",
        "top: 20px; right: 20px; z-index: 9999; min-width: 300px;",
    );
    toast.set_text_content(Some(message));

    if let Ok(close) = doc.create_element("button") {
        let _ = close.set_attribute("type", "button");
        let _ = close.set_attribute("class", "btn-close");
        let _ = close.set_attribute("data-bs-dismiss", "alert");
        let _ = toast.append_child(&close);
    }

    if body.append_child(&toast).is_err() {
        return;
    }
    schedule_dismiss(toast);
}

fn schedule_dismiss(toast: Element) {
    spawn_local(async move {
        sleep(Duration::from_millis(TOAST_DISMISS_MS)).await;
        bootstrap::Alert::new(&toast).close();
    });
}

/// JS-facing export: `showToast(message, kind)`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    let kind = kind.map(|k| ToastKind::parse(&k)).unwrap_or_default();
    show(message, kind);
}
