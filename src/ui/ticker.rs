//! Endless sponsor logo ticker.
//!
//! Every logo is cloned once so the strip holds the sequence twice. Sliding
//! the strip left by half its width then lands on an identical frame, which
//! makes the loop seamless.

use crate::config::PageMarkup;
use crate::dom_helpers;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickerAnimation {
    /// Pixels travelled per loop, half the doubled strip.
    pub distance: f64,
    pub duration_secs: f64,
}

impl TickerAnimation {
    pub fn from_scroll_width(scroll_width: f64, speed: f64) -> Self {
        let distance = scroll_width / 2.0;
        let duration_secs = if speed > 0.0 { distance / speed } else { 0.0 };
        TickerAnimation {
            distance,
            duration_secs,
        }
    }

    pub fn keyframes_css(&self, name: &str) -> String {
        format!(
            concat!(
                "@keyframes {} {{ 0% {{ transform: translateX(0); }} ",
                "100% {{ transform: translateX(-{}px); }} }}"
            ),
            name, self.distance
        )
    }

    pub fn animation_css(&self, name: &str) -> String {
        format!("{} {}s linear infinite", name, self.duration_secs)
    }
}

/// Appends a deep clone of every current child. Returns the number of clones.
pub fn duplicate_children(track: &Element) -> Result<u32, JsValue> {
    let children = track.children();
    let originals: Vec<Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();
    for logo in &originals {
        let clone: Node = logo.clone_node_with_deep(true)?;
        track.append_child(&clone)?;
    }
    Ok(originals.len() as u32)
}

/// Measures the doubled strip and starts the loop on it.
pub fn animate(
    document: &Document,
    track: &HtmlElement,
    markup: &PageMarkup,
) -> Result<TickerAnimation, JsValue> {
    let animation =
        TickerAnimation::from_scroll_width(track.scroll_width() as f64, markup.ticker_speed);

    let style = document.create_element("style")?;
    style.set_text_content(Some(&animation.keyframes_css(markup.ticker_keyframes)));
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    head.append_child(&style)?;

    track
        .style()
        .set_property("animation", &animation.animation_css(markup.ticker_keyframes))?;
    Ok(animation)
}

pub fn bind(window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let window = window.clone();
    let doc = document.clone();
    let markup = markup.clone();
    dom_helpers::when_dom_ready(document, move || {
        if let Err(e) = setup(&window, &doc, &markup) {
            warn!(error = ?e, "Sponsor ticker setup failed");
        }
    })
}

fn setup(window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let track = match document
        .query_selector(markup.ticker_selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(track) if track.child_element_count() > 0 => track,
        _ => {
            debug!("No sponsor logos on this page");
            return Ok(());
        }
    };
    duplicate_children(&track)?;

    // Widths are only final once the logo images have loaded
    let doc = document.clone();
    let markup = markup.clone();
    dom_helpers::when_loaded(window, document, move || match animate(&doc, &track, &markup) {
        Ok(animation) => info!(
            distance = animation.distance,
            duration_secs = animation.duration_secs,
            "Sponsor ticker running"
        ),
        Err(e) => warn!(error = ?e, "Sponsor ticker animation failed"),
    })
}
