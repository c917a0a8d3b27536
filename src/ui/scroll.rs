//! Smooth scrolling for same-page anchor links.

use crate::config::PageMarkup;
use crate::dom_helpers;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// Id an anchor's href points at, `None` for the bare `#` or non-fragment hrefs.
pub fn target_id(href: &str) -> Option<&str> {
    if !href.starts_with('#') {
        return None;
    }
    Some(&href[1..]).filter(|id| !id.is_empty())
}

/// Scroll position that leaves `offset` pixels above the target.
pub fn scroll_top(target_offset_top: f64, offset: f64) -> f64 {
    target_offset_top - offset
}

/// Scrolls to the target of `anchor` if it has one. Returns the requested
/// scroll position.
pub fn follow(
    window: &Window,
    document: &Document,
    anchor: &Element,
    markup: &PageMarkup,
) -> Option<f64> {
    let href = anchor.get_attribute("href")?;
    let target: HtmlElement = dom_helpers::element_by_id(document, target_id(&href)?)?;
    let top = scroll_top(target.offset_top() as f64, markup.scroll_offset);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Some(top)
}

pub fn bind(window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let anchors = dom_helpers::query_all(document, markup.anchor_selector)?;
    for anchor in &anchors {
        let window = window.clone();
        let document = document.clone();
        let this = anchor.clone();
        let markup = markup.clone();
        dom_helpers::on_event(anchor, "click", move |event| {
            event.prevent_default();
            if follow(&window, &document, &this, &markup).is_none() {
                debug!("Anchor has no scroll target");
            }
        })?;
    }
    debug!(anchors = anchors.len(), "Smooth scroll bound");
    Ok(())
}
