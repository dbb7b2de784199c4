//! Browser UI enhancements for the Loom Management System.
//!
//! Pages are rendered server-side; this crate compiles to WebAssembly,
//! loads on every page, and wires small independent behaviors onto the
//! markup that is already there. Nothing here owns data or talks to the
//! server — the page structure (Bootstrap classes and a few data
//! attributes) is the whole contract.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`enhance`] | The one-shot page-ready enhancement pass |
//! | [`toast`] | Floating notifications (`showToast`) |
//! | [`format`] | Locale formatting exports (`formatCurrency`, `formatDate`) |
//! | [`bootstrap`] | Bindings to the page's Bootstrap alert widget |
//! | [`dom`] | Shared document/selector/listener helpers |
//! | [`consts`] | Timing and layout constants |

pub mod bootstrap;
pub mod consts;
pub mod dom;
pub mod enhance;
pub mod format;
pub mod toast;

use wasm_bindgen::prelude::*;

/// Module entry point: set up logging and schedule the enhancement pass.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    enhance::install();
}
