//! Highlights the navigation link of the page being viewed.

use crate::config::PageMarkup;
use crate::dom_helpers;
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Last segment of a location path, empty for directory paths like `/`.
pub fn current_page(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or("")
}

pub fn is_active_link(href: Option<&str>, current: &str, home_page: &str) -> bool {
    match href {
        Some(href) => href == current || (current.is_empty() && href == home_page),
        None => false,
    }
}

/// Marks the link matching `pathname` active and every other link inactive.
/// Returns how many links ended up active.
pub fn highlight(
    document: &Document,
    pathname: &str,
    markup: &PageMarkup,
) -> Result<usize, JsValue> {
    let current = current_page(pathname);
    let mut active = 0;
    for link in dom_helpers::query_all(document, markup.nav_link_selector)? {
        let on = is_active_link(
            link.get_attribute("href").as_deref(),
            current,
            markup.home_page,
        );
        dom_helpers::set_class(&link, markup.active_class, on)?;
        if on {
            active += 1;
        }
    }
    Ok(active)
}

pub fn bind(window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let pathname = window.location().pathname()?;
    let doc = document.clone();
    let markup = markup.clone();
    dom_helpers::when_dom_ready(document, move || {
        if let Err(e) = highlight(&doc, &pathname, &markup) {
            warn!(error = ?e, "Nav highlight failed");
        }
    })
}
