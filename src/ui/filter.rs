//! Flagship card filter buttons.

use crate::config::PageMarkup;
use crate::dom_helpers;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Filter key that shows every card.
pub const SHOW_ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub active_buttons: Vec<bool>,
    pub visible_cards: Vec<bool>,
}

/// A card is shown when the filter is [`SHOW_ALL`] or equals its category.
/// Missing attributes compare equal to each other.
pub fn card_visible(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(SHOW_ALL) || filter == category
}

pub fn select(
    button_count: usize,
    clicked: usize,
    filter: Option<&str>,
    categories: &[Option<String>],
) -> FilterOutcome {
    FilterOutcome {
        active_buttons: super::exclusive(button_count, clicked),
        visible_cards: categories
            .iter()
            .map(|category| card_visible(filter, category.as_deref()))
            .collect(),
    }
}

/// Applies a click on `buttons[clicked]` to the buttons and cards.
pub fn click(
    buttons: &[Element],
    cards: &[Element],
    clicked: usize,
    markup: &PageMarkup,
) -> Result<FilterOutcome, JsValue> {
    let button = buttons
        .get(clicked)
        .ok_or_else(|| JsValue::from_str("filter button index out of range"))?;
    let filter = button.get_attribute(markup.filter_attr);
    let categories: Vec<Option<String>> = cards
        .iter()
        .map(|card| card.get_attribute(markup.category_attr))
        .collect();

    let outcome = select(buttons.len(), clicked, filter.as_deref(), &categories);
    for (button, &active) in buttons.iter().zip(&outcome.active_buttons) {
        dom_helpers::set_class(button, markup.active_class, active)?;
    }
    for (card, &visible) in cards.iter().zip(&outcome.visible_cards) {
        dom_helpers::set_class(card, markup.show_class, visible)?;
        dom_helpers::set_class(card, markup.hide_class, !visible)?;
    }
    Ok(outcome)
}

pub fn bind(_window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let buttons = dom_helpers::query_all(document, markup.filter_button_selector)?;
    if buttons.is_empty() {
        debug!("No filter buttons on this page");
        return Ok(());
    }
    let buttons = Rc::new(buttons);
    let cards = Rc::new(dom_helpers::query_all(document, markup.card_selector)?);

    for (index, button) in buttons.iter().enumerate() {
        let buttons = buttons.clone();
        let cards = cards.clone();
        let markup = markup.clone();
        dom_helpers::on_event(button, "click", move |_| {
            if let Err(e) = click(&buttons, &cards, index, &markup) {
                warn!(error = ?e, "Filter click failed");
            }
        })?;
    }
    debug!(buttons = buttons.len(), cards = cards.len(), "Filter bound");
    Ok(())
}
