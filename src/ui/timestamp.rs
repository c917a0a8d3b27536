//! Stamps the contact form with the time the page was ready, so the server
//! can reject submissions that come back implausibly fast.

use crate::config::PageMarkup;
use crate::dom_helpers;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlInputElement, Window};

/// Whole epoch milliseconds as the field expects them.
pub fn stamp_value(epoch_ms: f64) -> String {
    (epoch_ms.max(0.0).floor() as u64).to_string()
}

/// Writes `epoch_ms` into the timestamp field. False when there is no field.
pub fn stamp(document: &Document, markup: &PageMarkup, epoch_ms: f64) -> bool {
    match dom_helpers::element_by_id::<HtmlInputElement>(document, markup.timestamp_id) {
        Some(field) => {
            field.set_value(&stamp_value(epoch_ms));
            true
        }
        None => false,
    }
}

pub fn bind(_window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let doc = document.clone();
    let markup = markup.clone();
    dom_helpers::when_dom_ready(document, move || {
        if !stamp(&doc, &markup, js_sys::Date::now()) {
            debug!("No form timestamp field on this page");
        }
    })
}
