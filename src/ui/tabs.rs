//! Program detail tabs. Each tab button names the id of the panel it opens.

use crate::config::PageMarkup;
use crate::dom_helpers;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSwitch {
    pub active_tabs: Vec<bool>,
    pub target: Option<String>,
}

impl TabSwitch {
    pub fn new(tab_count: usize, clicked: usize, target: Option<String>) -> Self {
        TabSwitch {
            active_tabs: super::exclusive(tab_count, clicked),
            target,
        }
    }

    pub fn is_panel_active(&self, panel_id: &str) -> bool {
        self.target.as_deref() == Some(panel_id)
    }
}

/// Activates `tabs[clicked]` and the panel it targets, deactivating the rest.
/// Only elements in `panels` are touched; a target id outside that set leaves
/// every panel closed.
pub fn click(
    tabs: &[Element],
    panels: &[Element],
    clicked: usize,
    markup: &PageMarkup,
) -> Result<TabSwitch, JsValue> {
    let tab = tabs
        .get(clicked)
        .ok_or_else(|| JsValue::from_str("tab index out of range"))?;
    let switch = TabSwitch::new(tabs.len(), clicked, tab.get_attribute(markup.tab_attr));

    for (tab, &active) in tabs.iter().zip(&switch.active_tabs) {
        dom_helpers::set_class(tab, markup.active_class, active)?;
    }
    for panel in panels {
        let open = switch.is_panel_active(&panel.id());
        dom_helpers::set_class(panel, markup.active_class, open)?;
    }
    Ok(switch)
}

pub fn bind(_window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let tabs = dom_helpers::query_all(document, markup.tab_button_selector)?;
    if tabs.is_empty() {
        debug!("No tabs on this page");
        return Ok(());
    }
    let tabs = Rc::new(tabs);
    let panels = Rc::new(dom_helpers::query_all(document, markup.tab_panel_selector)?);

    for (index, tab) in tabs.iter().enumerate() {
        let tabs = tabs.clone();
        let panels = panels.clone();
        let markup = markup.clone();
        dom_helpers::on_event(tab, "click", move |_| {
            if let Err(e) = click(&tabs, &panels, index, &markup) {
                warn!(error = ?e, "Tab click failed");
            }
        })?;
    }
    Ok(())
}
