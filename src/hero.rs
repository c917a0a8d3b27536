//! Hooks a [`ParticleCanvas`] up to the hero canvas: sizing, pointer events,
//! resize rebuilds and the `requestAnimationFrame` loop.

use crate::config::PageMarkup;
use crate::dom_helpers;
use crate::renderer;
use crate::ParticleCanvas;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent, Window,
};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn bind(window: &Window, document: &Document, markup: &PageMarkup) -> Result<(), JsValue> {
    let canvas: HtmlCanvasElement = match dom_helpers::element_by_id(document, markup.canvas_id) {
        Some(canvas) => canvas,
        None => {
            debug!(id = markup.canvas_id, "No hero canvas on this page");
            return Ok(());
        }
    };
    let context = renderer::context_2d(&canvas)?;
    let particles = attach(window, document, &canvas, markup)?;
    start_animation(window, context, particles)
}

/// Sizes `canvas`, builds its particle field and registers the window
/// listeners that feed it. The returned handle is shared with the listeners.
pub fn attach(
    window: &Window,
    document: &Document,
    canvas: &HtmlCanvasElement,
    markup: &PageMarkup,
) -> Result<Rc<RefCell<ParticleCanvas>>, JsValue> {
    let (width, height) = fit_canvas(window, document, canvas, markup)?;
    let particles = Rc::new(RefCell::new(ParticleCanvas::new(width, height)));
    info!(
        width,
        height,
        count = particles.borrow().particle_count(),
        "Hero particle field ready"
    );

    {
        let particles = particles.clone();
        let canvas = canvas.clone();
        dom_helpers::on_event(window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let rect = canvas.get_bounding_client_rect();
                let [x, y] = surface_point(
                    [event.client_x() as f64, event.client_y() as f64],
                    [rect.left(), rect.top()],
                );
                particles.borrow_mut().set_pointer(x, y);
            }
        })?;
    }

    {
        let particles = particles.clone();
        dom_helpers::on_event(window, "mouseout", move |event| {
            // Moving between elements also fires mouseout; only leaving the
            // window has no related target.
            let left_window = event
                .dyn_ref::<MouseEvent>()
                .map_or(true, |e| e.related_target().is_none());
            if left_window {
                particles.borrow_mut().clear_pointer();
            }
        })?;
    }

    {
        let particles = particles.clone();
        let window_for_resize = window.clone();
        let document = document.clone();
        let canvas = canvas.clone();
        let markup = markup.clone();
        dom_helpers::on_event(window, "resize", move |_| {
            match fit_canvas(&window_for_resize, &document, &canvas, &markup) {
                Ok((width, height)) => particles.borrow_mut().resize(width, height),
                Err(e) => warn!(error = ?e, "Could not resize hero canvas"),
            }
        })?;
    }

    Ok(particles)
}

/// Client (viewport) coordinates relative to a surface whose top-left corner
/// sits at `origin` in the viewport.
pub fn surface_point(client: Vector2<f64>, origin: Vector2<f64>) -> Vector2<f64> {
    vecmath::vec2_sub(client, origin)
}

// Sizes the canvas to the viewport width and the hero region's height.
// Without a hero region the canvas keeps its laid-out height.
fn fit_canvas(
    window: &Window,
    document: &Document,
    canvas: &HtmlCanvasElement,
    markup: &PageMarkup,
) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0).max(0.0);
    let height = document
        .query_selector(markup.hero_selector)?
        .and_then(|hero| hero.dyn_into::<HtmlElement>().ok())
        .map(|hero| hero.offset_height())
        .unwrap_or_else(|| canvas.client_height())
        .max(0) as f64;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok((width, height))
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map(|_| ())
}

// Each frame ticks the field and schedules the next one. The callback owns a
// handle to itself, so the loop lives as long as the page.
fn start_animation(
    window: &Window,
    context: CanvasRenderingContext2d,
    particles: Rc<RefCell<ParticleCanvas>>,
) -> Result<(), JsValue> {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let loop_window = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = particles.borrow_mut().tick(&context) {
            warn!(error = ?e, "Hero frame failed");
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_frame(&loop_window, callback) {
                warn!(error = ?e, "Could not schedule next hero frame");
            }
        }
    }) as Box<dyn FnMut()>));

    let scheduled = match frame.borrow().as_ref() {
        Some(callback) => request_frame(window, callback),
        None => Ok(()),
    };
    scheduled
}
