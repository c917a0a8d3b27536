//! Mobile navigation toggle.

use crate::config::PageMarkup;
use crate::dom_helpers;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

pub fn bind(_window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let button: Element = match dom_helpers::element_by_id(document, markup.menu_button_id) {
        Some(button) => button,
        None => {
            debug!("No mobile menu button on this page");
            return Ok(());
        }
    };
    let menu: Element = match dom_helpers::element_by_id(document, markup.menu_id) {
        Some(menu) => menu,
        None => {
            debug!("Mobile menu button without a menu");
            return Ok(());
        }
    };

    let active_class = markup.active_class;
    dom_helpers::on_event(&button, "click", move |_| {
        if let Err(e) = menu.class_list().toggle(active_class) {
            warn!(error = ?e, "Menu toggle failed");
        }
    })
}
