//! Locale formatting helpers exposed to page scripts.
//!
//! Both functions delegate to the browser's `Intl`/`Date` primitives with
//! the Indian English locale, matching how the rest of the application
//! renders amounts and dates. Malformed input renders however the
//! underlying primitive renders it (e.g. `Invalid Date`); there is no
//! controlled error path at this layer.

use js_sys::{Array, Intl, Object, Reflect};
use wasm_bindgen::prelude::*;

/// Locale used across the application.
const LOCALE: &str = "en-IN";

/// Format an amount as Indian Rupees, e.g. `₹1,500.00`.
#[wasm_bindgen(js_name = formatCurrency)]
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let options = Object::new();
    let _ = Reflect::set(&options, &"style".into(), &"currency".into());
    let _ = Reflect::set(&options, &"currency".into(), &"INR".into());

    let locales = Array::of1(&LOCALE.into());
    let formatter = Intl::NumberFormat::new(&locales, &options);
    formatter
        .format()
        .call1(&JsValue::NULL, &amount.into())
        .ok()
        .and_then(|formatted| formatted.as_string())
        .unwrap_or_else(|| amount.to_string())
}

/// Render a date-like string in long form, e.g. `5 March 2024`.
#[wasm_bindgen(js_name = formatDate)]
#[must_use]
pub fn format_date(date_string: &str) -> String {
    let options = Object::new();
    let _ = Reflect::set(&options, &"year".into(), &"numeric".into());
    let _ = Reflect::set(&options, &"month".into(), &"long".into());
    let _ = Reflect::set(&options, &"day".into(), &"numeric".into());

    let date = js_sys::Date::new(&date_string.into());
    String::from(date.to_locale_date_string(LOCALE, &options))
}
