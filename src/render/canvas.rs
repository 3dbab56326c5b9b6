// canvas.rs - Browser 2D context surface
//
// Owns the context handle only. Canvas sizing and DPR transforms belong to the page.

use std::f64::consts::TAU;
use std::fmt::Write;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Composite, Surface};
use crate::error::{FireworksError, Result};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    // Reused for fill style strings, one per circle adds up
    style: String,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, style: String::with_capacity(32) }
    }

    /// Look up `<canvas id=...>` and acquire a 2D context with alpha.
    pub fn from_element_id(id: &str) -> Result<Self> {
        let unavailable = |what: &str| FireworksError::SurfaceUnavailable(format!("{what} (canvas `{id}`)"));

        let window = web_sys::window().ok_or_else(|| unavailable("no window"))?;
        let document = window.document().ok_or_else(|| unavailable("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| unavailable("element not found"))?
            .dyn_into()
            .map_err(|_| unavailable("element is not a canvas"))?;

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"alpha".into(), &true.into())
            .map_err(|_| unavailable("could not build context options"))?;

        let ctx = canvas
            .get_context_with_context_options("2d", &options)
            .map_err(|_| unavailable("getContext threw"))?
            .ok_or_else(|| unavailable("2d context not supported"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| unavailable("context is not 2d"))?;

        Ok(Self::new(ctx))
    }
}

impl Surface for CanvasSurface {
    fn set_composite(&mut self, mode: Composite) {
        if let Err(err) = self.ctx.set_global_composite_operation(mode.as_css()) {
            log::warn!("composite mode {} rejected: {err:?}", mode.as_css());
        }
    }

    fn set_fill(&mut self, color: Color) {
        self.style.clear();
        let _ = write!(self.style, "{color}");
        self.ctx.set_fill_style_str(&self.style);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ctx.begin_path();
        // Only fails on a negative radius
        let _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
