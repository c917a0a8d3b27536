mod utils;

pub mod color;
pub mod config;
pub mod dom_helpers;
pub mod field;
pub mod hero;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod ui;

use config::PageMarkup;
use field::ParticleField;
use renderer::CanvasRenderer;
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{console, CanvasRenderingContext2d, Document, Window};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

type BindFn = fn(&Window, &Document, &PageMarkup) -> Result<(), JsValue>;

#[wasm_bindgen(start)]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
    if let Err(e) = bind_page(&PageMarkup::default()) {
        warn!(error = ?e, "Page behaviors not attached");
    }
}

// Attaches every behavior whose markup is present. A failing feature is
// logged and the rest still get bound.
pub fn bind_page(markup: &PageMarkup) -> Result<(), JsValue> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;

    let features: [(&str, BindFn); 8] = [
        ("hero", hero::bind),
        ("filter", ui::filter::bind),
        ("menu", ui::menu::bind),
        ("tabs", ui::tabs::bind),
        ("nav", ui::nav::bind),
        ("timestamp", ui::timestamp::bind),
        ("scroll", ui::scroll::bind),
        ("ticker", ui::ticker::bind),
    ];
    for (name, bind) in features.iter() {
        if let Err(e) = bind(&window, &document, markup) {
            warn!(feature = *name, error = ?e, "Failed to bind page feature");
        }
    }
    Ok(())
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// JS-facing handle on a particle field. `tick` advances and draws one frame,
/// so any scheduler on the JS side can drive it.
#[wasm_bindgen]
pub struct ParticleCanvas {
    field: ParticleField,
}

#[wasm_bindgen]
impl ParticleCanvas {
    pub fn new(width: f64, height: f64) -> ParticleCanvas {
        ParticleCanvas {
            field: ParticleField::new(width, height),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.field.set_pointer(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.field.clear_pointer();
    }

    pub fn has_pointer(&self) -> bool {
        self.field.pointer().is_present()
    }

    pub fn particle_count(&self) -> usize {
        self.field.particles().len()
    }

    pub fn width(&self) -> f64 {
        self.field.width()
    }

    pub fn height(&self) -> f64 {
        self.field.height()
    }

    pub fn generation(&self) -> u64 {
        self.field.generation()
    }

    pub fn tick(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        #[cfg(feature = "frame-timing")]
        let _timer = Timer::new("ParticleCanvas::tick");
        self.field.tick(&mut CanvasRenderer::new(ctx))
    }
}
