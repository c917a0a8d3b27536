// Drawing seam for the particle field. The field only knows how to clear,
// fill a circle and stroke a line; `CanvasRenderer` forwards those calls to
// a 2D canvas context, tests record them instead.

use crate::color::Color;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Renderer {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), Self::Error>;
}

pub struct CanvasRenderer<'a> {
    pub context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> Self {
        CanvasRenderer { context }
    }
}

// Grabs the 2D context of a canvas on the DOM
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("context is not a CanvasRenderingContext2d"))
}

impl<'a> Renderer for CanvasRenderer<'a> {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.set_fill_style_str(&color.to_css(opacity));
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.set_stroke_style_str(&color.to_css(opacity));
        self.context.set_line_width(width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }
}
