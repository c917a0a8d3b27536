// Helper functions for dealing with the document: looking elements up,
// attaching long-lived event listeners and toggling classes

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| String::from("No global window"))
}

pub fn document(window: &Window) -> Result<Document, String> {
    window
        .document()
        .ok_or_else(|| String::from("Window has no document"))
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    if on {
        element.class_list().add_1(class)
    } else {
        element.class_list().remove_1(class)
    }
}

// The listener stays registered for the lifetime of the page
pub fn on_event<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn once<F: FnOnce() + 'static>(f: F) -> impl FnMut(Event) + 'static {
    let mut f = Some(f);
    move |_| {
        if let Some(f) = f.take() {
            f();
        }
    }
}

// Runs `f` once the DOM is parsed, right away if that already happened
pub fn when_dom_ready<F: FnOnce() + 'static>(document: &Document, f: F) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    on_event(document, "DOMContentLoaded", once(f))
}

// Runs `f` once the page and its images have loaded
pub fn when_loaded<F: FnOnce() + 'static>(
    window: &Window,
    document: &Document,
    f: F,
) -> Result<(), JsValue> {
    if document.ready_state() == "complete" {
        f();
        return Ok(());
    }
    on_event(window, "load", once(f))
}
